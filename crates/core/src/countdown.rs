//! Countdown timer for timed sessions
//!
//! Whole seconds are consumed from elapsed milliseconds; the remainder carries
//! over to the next tick so frame-sized deltas add up to exact seconds.

use crate::types::MS_PER_SECOND;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Countdown {
    remaining_secs: u32,
    /// Milliseconds accumulated toward the next whole second (< 1000).
    carry_ms: u32,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining_secs: secs,
            carry_ms: 0,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn carry_ms(&self) -> u32 {
        self.carry_ms
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Advance by `elapsed_ms` and return the number of whole seconds consumed.
    ///
    /// The clock clamps at zero; time past expiry is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_core::Countdown;
    ///
    /// let mut c = Countdown::new(2);
    /// assert_eq!(c.advance(600), 0);
    /// assert_eq!(c.advance(600), 1);
    /// assert_eq!(c.remaining_secs(), 1);
    /// assert_eq!(c.advance(10_000), 1);
    /// assert!(c.is_expired());
    /// ```
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.is_expired() {
            return 0;
        }

        let total = self.carry_ms as u64 + elapsed_ms as u64;
        let whole = (total / MS_PER_SECOND as u64).min(self.remaining_secs as u64) as u32;
        self.remaining_secs -= whole;
        self.carry_ms = if self.remaining_secs == 0 {
            0
        } else {
            (total % MS_PER_SECOND as u64) as u32
        };
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_ticks_accumulate() {
        let mut c = Countdown::new(10);
        for _ in 0..62 {
            c.advance(16);
        }
        // 62 * 16 = 992ms
        assert_eq!(c.remaining_secs(), 10);
        assert_eq!(c.carry_ms(), 992);

        assert_eq!(c.advance(16), 1);
        assert_eq!(c.remaining_secs(), 9);
        assert_eq!(c.carry_ms(), 8);
    }

    #[test]
    fn large_delta_consumes_several_seconds() {
        let mut c = Countdown::new(10);
        assert_eq!(c.advance(3_500), 3);
        assert_eq!(c.remaining_secs(), 7);
        assert_eq!(c.carry_ms(), 500);
    }

    #[test]
    fn clamps_at_zero() {
        let mut c = Countdown::new(1);
        assert_eq!(c.advance(u32::MAX), 1);
        assert_eq!(c.remaining_secs(), 0);
        assert_eq!(c.carry_ms(), 0);
        assert_eq!(c.advance(5_000), 0);
        assert!(c.is_expired());
    }

    #[test]
    fn zero_second_clock_is_already_expired() {
        let mut c = Countdown::new(0);
        assert!(c.is_expired());
        assert_eq!(c.advance(1_000), 0);
    }
}
