//! Time source used for id generation and invoice issue dates

use chrono::{Local, NaiveDate, Utc};

/// Source of "now" for the store
///
/// The server uses [`SystemClock`]; tests pin time with [`FixedClock`] so
/// that generated ids and issue dates are predictable.
pub trait Clock: Send + Sync {
    /// Current wall-clock time in milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    millis: i64,
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(millis: i64, date: NaiveDate) -> Self {
        Self { millis, date }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}
