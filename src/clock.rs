use std::time::{Duration, Instant};

/// Fixed-period timer polled from the main loop.
///
/// The timer arms on the first poll after creation or [`Interval::reset`],
/// then fires at most once per poll. Deadlines advance by whole periods, so
/// late polls do not shift later ticks. After falling more than one period
/// behind the schedule restarts from the late poll instead of firing a burst.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: Duration,
    last: Option<Instant>,
}

impl Interval {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    /// Disarms the timer; the next poll starts a fresh period.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Returns true when a period has elapsed as of `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return false;
        };

        let due = last + self.period;
        if now < due {
            return false;
        }

        let behind = now.saturating_duration_since(due);
        self.last = Some(if behind >= self.period { now } else { due });
        true
    }
}
