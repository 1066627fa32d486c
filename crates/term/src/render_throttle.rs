//! Redraw throttling for static screens.
//!
//! While the game is moving every frame is drawn. On static screens (start
//! prompt, difficulty prompt, pause menu, game over) a frame is drawn when the
//! visible state changes, and otherwise at most once per interval.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    /// (time, fingerprint) of the last drawn frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to render a new frame, and record it if so.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, fp)) if fp != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
