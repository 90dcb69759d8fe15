//! The metal detector guard's head-turning cadence.

use std::time::Duration;

/// Keyframes of one cycle: (seconds into the cycle, looking away).
pub const KEYFRAMES: [(f64, bool); 7] = [
    (0.0, false),
    (2.5, true),
    (3.5, false),
    (6.0, true),
    (7.5, false),
    (10.0, true),
    (11.5, false),
];

/// Length of one cycle in seconds.
pub const CYCLE_SECS: f64 = 11.5;

/// Drives the looking-away signal from elapsed time.
///
/// The schedule owns the clock, not the puzzle: the controller advances it
/// on every tick and pushes any change into the timing challenge.
#[derive(Debug, Clone)]
pub struct LookoutSchedule {
    elapsed: f64,
    speed: f64,
    looking_away: bool,
    running: bool,
}

impl LookoutSchedule {
    /// A stopped schedule. `speed` multiplies elapsed time.
    pub fn new(speed: f64) -> Self {
        Self {
            elapsed: 0.0,
            speed,
            looking_away: false,
            running: false,
        }
    }

    /// Restart from the top of the cycle, guard watching.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.looking_away = false;
        self.running = true;
    }

    /// Halt; further ticks do nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the schedule is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current signal.
    pub fn looking_away(&self) -> bool {
        self.looking_away
    }

    /// Seconds into the current cycle.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// Advance the clock. Returns the new signal if it changed.
    pub fn advance(&mut self, dt: Duration) -> Option<bool> {
        if !self.running {
            return None;
        }
        self.elapsed = (self.elapsed + dt.as_secs_f64() * self.speed) % CYCLE_SECS;
        let now = state_at(self.elapsed);
        if now == self.looking_away {
            return None;
        }
        self.looking_away = now;
        Some(now)
    }
}

/// Signal at `t` seconds into a cycle.
pub fn state_at(t: f64) -> bool {
    KEYFRAMES
        .iter()
        .rev()
        .find(|(at, _)| *at <= t)
        .is_some_and(|(_, away)| *away)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn stopped_schedule_ignores_ticks() {
        let mut schedule = LookoutSchedule::new(1.0);
        assert_eq!(schedule.advance(secs(3.0)), None);
        assert!(!schedule.looking_away());
    }

    #[test]
    fn follows_keyframes() {
        let mut schedule = LookoutSchedule::new(1.0);
        schedule.start();
        assert_eq!(schedule.advance(secs(2.0)), None);
        assert_eq!(schedule.advance(secs(0.6)), Some(true));
        assert_eq!(schedule.advance(secs(0.5)), None);
        assert_eq!(schedule.advance(secs(0.5)), Some(false));
        assert_eq!(schedule.advance(secs(2.5)), Some(true));
    }

    #[test]
    fn cycle_wraps() {
        let mut schedule = LookoutSchedule::new(1.0);
        schedule.start();
        schedule.advance(secs(11.0));
        assert!(schedule.looking_away());
        assert_eq!(schedule.advance(secs(1.0)), Some(false));
        assert!(schedule.elapsed_secs() < 1.0);
        assert_eq!(schedule.advance(secs(2.0)), Some(true));
    }

    #[test]
    fn speed_scales_time() {
        let mut schedule = LookoutSchedule::new(2.0);
        schedule.start();
        assert_eq!(schedule.advance(secs(1.5)), Some(true));
    }

    #[test]
    fn stop_and_restart() {
        let mut schedule = LookoutSchedule::new(1.0);
        schedule.start();
        schedule.advance(secs(3.0));
        schedule.stop();
        assert_eq!(schedule.advance(secs(1.0)), None);
        schedule.start();
        assert!(!schedule.looking_away());
        assert_eq!(schedule.elapsed_secs(), 0.0);
    }

    #[test]
    fn state_at_keyframes() {
        assert!(!state_at(0.0));
        assert!(state_at(2.5));
        assert!(!state_at(3.4 + 0.2));
        assert!(state_at(6.5));
        assert!(!state_at(8.0));
        assert!(state_at(11.0));
    }
}
