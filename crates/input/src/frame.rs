//! Per-frame button batch.
//!
//! Key presses arriving between two ticks are collected here and handed to the
//! session once per tick. Input is edge-triggered: a button pressed several
//! times inside one frame counts once, and terminal auto-repeat is never fed in.

use arrayvec::ArrayVec;

use crate::types::Button;

/// Enough for every distinct button in one frame.
pub const FRAME_CAPACITY: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pressed: ArrayVec<Button, FRAME_CAPACITY>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns false if the button was already pressed this frame.
    pub fn press(&mut self, button: Button) -> bool {
        if self.pressed.contains(&button) {
            return false;
        }
        self.pressed.try_push(button).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn pressed(&self) -> &[Button] {
        &self.pressed
    }

    /// Hand the frame's presses over in arrival order and start a new frame.
    pub fn take(&mut self) -> ArrayVec<Button, FRAME_CAPACITY> {
        std::mem::take(&mut self.pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_presses_collapse() {
        let mut frame = FrameInput::new();
        assert!(frame.press(Button::Left));
        assert!(!frame.press(Button::Left));
        assert!(frame.press(Button::A));
        assert_eq!(frame.pressed(), &[Button::Left, Button::A]);
    }

    #[test]
    fn take_starts_a_new_frame() {
        let mut frame = FrameInput::new();
        frame.press(Button::Up);
        let buttons = frame.take();
        assert_eq!(buttons.as_slice(), &[Button::Up]);
        assert!(frame.is_empty());
        assert!(frame.press(Button::Up));
    }

    #[test]
    fn every_button_fits() {
        let mut frame = FrameInput::new();
        for b in [
            Button::Up,
            Button::Down,
            Button::Left,
            Button::Right,
            Button::A,
            Button::B,
            Button::X,
            Button::Select,
        ] {
            assert!(frame.press(b));
        }
        assert_eq!(frame.pressed().len(), FRAME_CAPACITY);
    }
}
