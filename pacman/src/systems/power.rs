use tracing::debug;

/// Countdown for the player's power window.
///
/// Re-arming while active restarts the countdown at the full duration; windows never stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerTimer {
    active: bool,
    remaining_ms: u32,
}

impl PowerTimer {
    pub fn arm(&mut self, duration_ms: u32) {
        debug!(duration_ms, refreshed = self.active, "Power timer armed");
        self.active = duration_ms > 0;
        self.remaining_ms = duration_ms;
    }

    /// Counts down by `elapsed_ms`.
    ///
    /// Returns `true` exactly once, on the call where the window closes.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.active {
            return false;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.active = false;
            debug!("Power timer expired");
            return true;
        }
        false
    }

    /// Stops the countdown without reporting an expiry.
    pub fn disarm(&mut self) {
        self.active = false;
        self.remaining_ms = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_by_default() {
        let mut timer = PowerTimer::default();
        assert!(!timer.is_active());
        assert!(!timer.advance(100));
    }

    #[test]
    fn test_expires_once() {
        let mut timer = PowerTimer::default();
        timer.arm(250);
        assert!(!timer.advance(100));
        assert!(!timer.advance(100));
        assert!(timer.advance(100));
        assert_eq!(timer.remaining_ms(), 0);
        assert!(!timer.advance(100));
    }

    #[test]
    fn test_zero_duration_never_activates() {
        let mut timer = PowerTimer::default();
        timer.arm(0);
        assert!(!timer.is_active());
    }
}
