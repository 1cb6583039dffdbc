use std::time::{Duration, Instant};

/// Default input poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get the input poll duration for the main loop
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A cancellable repeating schedule
///
/// Holds at most one outstanding schedule. The owner polls it with the
/// current instant and runs one unit of work per period that has elapsed.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Schedule the first tick one period from `now`; false if already scheduled
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.period);
        true
    }

    /// Drop the outstanding schedule; false if nothing was scheduled
    pub fn cancel(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of whole periods elapsed up to `now`, advancing the schedule
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };
        let mut count = 0;
        while next <= now {
            count += 1;
            next += self.period;
        }
        self.next_due = Some(next);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_start_is_single_schedule() {
        let now = Instant::now();
        let mut ticker = Ticker::every_second();
        assert!(ticker.start(now));
        assert!(!ticker.start(now));
        assert!(ticker.is_scheduled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut ticker = Ticker::every_second();
        assert!(!ticker.cancel());
        ticker.start(Instant::now());
        assert!(ticker.cancel());
        assert!(!ticker.cancel());
        assert!(!ticker.is_scheduled());
    }

    #[test]
    fn test_due_counts_whole_periods() {
        let start = Instant::now();
        let mut ticker = Ticker::every_second();
        ticker.start(start);

        assert_eq!(ticker.due(start + Duration::from_millis(500)), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.due(start + Duration::from_millis(3500)), 2);
        assert_eq!(ticker.due(start + Duration::from_millis(3900)), 0);
    }

    #[test]
    fn test_due_when_cancelled() {
        let start = Instant::now();
        let mut ticker = Ticker::every_second();
        ticker.start(start);
        ticker.cancel();
        assert_eq!(ticker.due(start + Duration::from_secs(10)), 0);
    }
}
