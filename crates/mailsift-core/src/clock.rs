//! Wall-clock abstraction for date predicates.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Date predicates compare message timestamps against `now`, so the clock
/// is injected rather than read ambiently; tests pin it to a fixed instant.
/// The clock is read once per condition evaluation, never cached across a
/// run.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
