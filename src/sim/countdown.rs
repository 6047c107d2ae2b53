//! Auto-restart countdown
//!
//! Runs on wall-clock seconds fed in by the driver, so it expires after the
//! same real time whatever the frame rate is.

use serde::{Deserialize, Serialize};

/// Whole-second countdown shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestartCountdown {
    remaining: u32,
    /// Seconds accumulated toward the next decrement
    #[serde(skip)]
    carry: f64,
}

impl RestartCountdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            carry: 0.0,
        }
    }

    /// Seconds left on the display
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Feed elapsed real time; decrements once per full second
    ///
    /// Returns true on the call that reaches zero.
    pub fn advance(&mut self, elapsed_secs: f64) -> bool {
        if self.is_expired() {
            return false;
        }
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.carry += elapsed_secs;
        }
        while self.carry >= 1.0 && self.remaining > 0 {
            self.carry -= 1.0;
            self.remaining -= 1;
        }
        self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_whole_seconds() {
        let mut countdown = RestartCountdown::new(3);
        assert!(!countdown.advance(0.5));
        assert_eq!(countdown.remaining(), 3);
        assert!(!countdown.advance(0.5));
        assert_eq!(countdown.remaining(), 2);
        assert!(!countdown.advance(1.0));
        assert_eq!(countdown.remaining(), 1);
        assert!(countdown.advance(1.0));
        assert!(countdown.is_expired());
        // Fires exactly once
        assert!(!countdown.advance(5.0));
    }

    #[test]
    fn test_independent_of_frame_rate() {
        for fps in [30u32, 60, 144] {
            let mut countdown = RestartCountdown::new(3);
            let frame = 1.0 / fps as f64;
            let mut frames = 0;
            while !countdown.advance(frame) {
                frames += 1;
                assert!(frames < fps * 4, "countdown never expired at {fps} fps");
            }
            let elapsed = (frames + 1) as f64 * frame;
            assert!((elapsed - 3.0).abs() <= frame + 1e-9, "{fps} fps took {elapsed}s");
        }
    }

    #[test]
    fn test_long_stall_expires_at_once() {
        let mut countdown = RestartCountdown::new(3);
        assert!(countdown.advance(10.0));
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut countdown = RestartCountdown::new(3);
        assert!(!countdown.advance(-4.0));
        assert!(!countdown.advance(f64::NAN));
        assert_eq!(countdown.remaining(), 3);
    }
}
