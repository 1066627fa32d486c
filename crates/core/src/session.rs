//! Session module - drives one game from reset to the end
//!
//! The session wraps a [`MazeState`] with the lifecycle around it: the start
//! prompt, difficulty selection, the countdown, pausing and the end condition.
//! Every operation that does not apply in the current status is ignored.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::countdown::Countdown;
use crate::layout::Layout;
use crate::maze_state::MazeState;
use crate::types::*;

/// Maximum number of undrained events kept by a session.
pub const EVENT_CAPACITY: usize = 8;

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Timed sessions ask for a difficulty and run a countdown.
    pub timed: bool,
    /// Milliseconds between player steps in [`Session::update`].
    pub move_interval_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timed: true,
            move_interval_ms: MOVE_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: MazeState,
    layout: Layout,
    config: SessionConfig,
    status: SessionStatus,
    outcome: Option<Outcome>,
    difficulty: Option<Difficulty>,
    countdown: Option<Countdown>,
    paused: bool,
    move_timer_ms: u32,
    events: ArrayVec<SessionEvent, EVENT_CAPACITY>,
}

impl Session {
    pub fn new(layout: Layout) -> Self {
        Self::with_config(layout, SessionConfig::default())
    }

    pub fn with_config(layout: Layout, config: SessionConfig) -> Self {
        Self {
            state: MazeState::new(&layout),
            layout,
            config,
            status: SessionStatus::Idle,
            outcome: None,
            difficulty: None,
            countdown: None,
            paused: false,
            move_timer_ms: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &MazeState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Seconds left on the clock, or None for an untimed or not yet started session
    pub fn remaining_secs(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining_secs())
    }

    /// True while the game advances: running and not paused
    pub fn is_playing(&self) -> bool {
        self.status == SessionStatus::Running && !self.paused
    }

    fn push_event(&mut self, event: SessionEvent) {
        // A full buffer means nobody is draining; newest events are dropped.
        let _ = self.events.try_push(event);
    }

    /// Take every event recorded since the last call
    pub fn take_events(&mut self) -> ArrayVec<SessionEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Replace the template and reset to it.
    ///
    /// Ignored while Running. Returns true if the reset happened.
    pub fn reset(&mut self, layout: Layout) -> bool {
        if self.status == SessionStatus::Running {
            return false;
        }
        self.layout = layout;
        self.reset_to_layout();
        true
    }

    /// Reset to the current template.
    ///
    /// Ignored while Running. Returns true if the reset happened.
    pub fn restart(&mut self) -> bool {
        if self.status == SessionStatus::Running {
            return false;
        }
        self.reset_to_layout();
        self.push_event(SessionEvent::Restarted);
        true
    }

    fn reset_to_layout(&mut self) {
        self.state.reset(&self.layout);
        self.status = SessionStatus::Idle;
        self.outcome = None;
        self.difficulty = None;
        self.countdown = None;
        self.paused = false;
        self.move_timer_ms = 0;
    }

    /// Leave Idle. Timed sessions wait for a difficulty, untimed ones run at once.
    pub fn start(&mut self) -> bool {
        if self.status != SessionStatus::Idle {
            return false;
        }
        self.push_event(SessionEvent::Started);
        if self.config.timed {
            self.status = SessionStatus::AwaitingDifficulty;
        } else {
            self.status = SessionStatus::Running;
        }
        true
    }

    /// Pick the countdown and begin running.
    ///
    /// Accepted from Idle, AwaitingDifficulty or Ended. From Ended the grid
    /// is reset to the template first, so the new run starts fresh.
    pub fn set_difficulty(&mut self, level: Difficulty) -> bool {
        match self.status {
            SessionStatus::Idle | SessionStatus::AwaitingDifficulty => {}
            SessionStatus::Ended => self.reset_to_layout(),
            SessionStatus::Running => return false,
        }
        self.difficulty = Some(level);
        self.countdown = Some(Countdown::new(level.countdown_secs()));
        self.status = SessionStatus::Running;
        self.move_timer_ms = 0;
        self.push_event(SessionEvent::DifficultySelected(level));
        true
    }

    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.state.request_direction(dir);
        true
    }

    /// Advance the countdown. Ends the session when it reaches zero.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.is_playing() {
            return;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };
        countdown.advance(elapsed_ms);
        if countdown.is_expired() {
            self.end(Outcome::TimeExpired);
        }
    }

    /// Move the player one cell. Ends the session when the last pellet is eaten.
    pub fn step(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let moved = self.state.step();
        self.check_complete();
        moved
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Like [`Session::is_complete`], but ends a running session that is complete.
    pub fn check_complete(&mut self) -> bool {
        let complete = self.state.is_complete();
        if complete && self.status == SessionStatus::Running {
            self.end(Outcome::AllPelletsCollected);
        }
        complete
    }

    fn end(&mut self, outcome: Outcome) {
        self.status = SessionStatus::Ended;
        self.outcome = Some(outcome);
        self.paused = false;
        self.push_event(SessionEvent::Ended {
            outcome,
            score: self.state.score(),
        });
    }

    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.paused = true;
        self.push_event(SessionEvent::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != SessionStatus::Running || !self.paused {
            return false;
        }
        self.paused = false;
        self.push_event(SessionEvent::Resumed);
        true
    }

    /// Pause when playing, resume when paused.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// One frame of play: countdown first, then at most the steps the
    /// movement timer has accumulated.
    ///
    /// Stepping stops at the first bump: the facing is fixed within a frame,
    /// so a long frame moves the player at most one straight run.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.tick(elapsed_ms);
        if !self.is_playing() {
            return;
        }

        let interval = self.config.move_interval_ms.max(1);
        self.move_timer_ms = self.move_timer_ms.saturating_add(elapsed_ms);
        while self.move_timer_ms >= interval {
            self.move_timer_ms -= interval;
            let moved = self.step();
            if !self.is_playing() {
                self.move_timer_ms = 0;
                break;
            }
            if !moved {
                self.move_timer_ms %= interval;
                break;
            }
        }
    }

    /// Apply one newly pressed button. Returns true if it did anything.
    pub fn press(&mut self, button: Button) -> bool {
        match self.status {
            SessionStatus::Idle => match button {
                Button::A => self.start(),
                _ => false,
            },
            SessionStatus::AwaitingDifficulty => match Difficulty::from_button(button) {
                Some(level) => self.set_difficulty(level),
                // Not a difficulty button: keep waiting.
                None => false,
            },
            SessionStatus::Running if self.paused => match button {
                Button::A | Button::Select => self.resume(),
                _ => false,
            },
            SessionStatus::Running => match button {
                Button::Select => self.toggle_pause(),
                _ => match button.direction() {
                    Some(dir) => self.request_direction(dir),
                    None => false,
                },
            },
            SessionStatus::Ended => match button {
                Button::A => self.restart(),
                _ => false,
            },
        }
    }

    /// Hash of everything the view shows, for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.status.hash(&mut h);
        self.outcome.hash(&mut h);
        self.difficulty.hash(&mut h);
        self.paused.hash(&mut h);
        self.remaining_secs().hash(&mut h);
        self.state.hash(&mut h);
        h.finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Layout::classic())
    }
}
