//! Fixed-period intervals driven by elapsed wall-clock time.
//!
//! A running round owns one [`Timers`] set. Stopping or dropping it is the only way the round's
//! cadences end, so a torn-down round can never receive a stale tick.

use std::time::Duration;

use crate::config::GameConfig;

/// Fires once for every full `period` of time fed into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    accumulated: Duration,
    running: bool,
}

impl Interval {
    /// Creates a running interval. Periods shorter than a millisecond are rounded up to one.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            running: true,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds `elapsed` and returns how many whole periods have completed. A stopped interval
    /// never fires.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }
}

/// The three cadences of a running round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timers {
    /// Simulation ticks.
    pub tick: Interval,
    /// Power countdown steps.
    pub power: Interval,
    /// Input commits.
    pub input: Interval,
}

impl Timers {
    pub fn new(tick: Duration, power: Duration, input: Duration) -> Self {
        Self {
            tick: Interval::new(tick),
            power: Interval::new(power),
            input: Interval::new(input),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Duration::from_millis(config.tick_ms),
            Duration::from_millis(config.power_step_ms),
            Duration::from_millis(config.input_ms),
        )
    }

    pub fn stop_all(&mut self) {
        self.tick.stop();
        self.power.stop();
        self.input.stop();
    }

    pub fn any_running(&self) -> bool {
        self.tick.is_running() || self.power.is_running() || self.input.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accumulates_partial_periods() {
        let mut interval = Interval::new(Duration::from_millis(100));
        assert_eq!(interval.advance(Duration::from_millis(60)), 0);
        assert_eq!(interval.advance(Duration::from_millis(60)), 1);
        assert_eq!(interval.advance(Duration::from_millis(250)), 2);
    }

    #[test]
    fn test_stopped_interval_never_fires() {
        let mut interval = Interval::new(Duration::from_millis(10));
        interval.stop();
        assert_eq!(interval.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let interval = Interval::new(Duration::ZERO);
        assert_eq!(interval.period(), Duration::from_millis(1));
    }

    #[test]
    fn test_stop_all() {
        let mut timers = Timers::new(Duration::from_millis(120), Duration::from_millis(100), Duration::from_millis(30));
        assert!(timers.any_running());
        timers.stop_all();
        assert!(!timers.any_running());
    }
}
