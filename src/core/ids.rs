//! Record id generation
//!
//! Ids read as millisecond timestamps, but two records created within the
//! same millisecond never share one: the generator hands out
//! `max(now, last + 1)`.

use crate::core::clock::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Strictly increasing id source shared by all record kinds
pub struct IdGenerator {
    last: AtomicI64,
    clock: Arc<dyn Clock>,
}

impl IdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            last: AtomicI64::new(i64::MIN),
            clock,
        }
    }

    /// Hand out the next id
    pub fn next_id(&self) -> i64 {
        let now = self.clock.now_millis();
        let mut last = self.last.load(Ordering::Acquire);

        loop {
            let candidate = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::{FixedClock, SystemClock};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn frozen(millis: i64) -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(
            millis,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ))
    }

    #[test]
    fn test_first_id_is_the_clock_reading() {
        let ids = IdGenerator::new(frozen(1_000));
        assert_eq!(ids.next_id(), 1_000);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let ids = IdGenerator::new(frozen(1_000));

        assert_eq!(ids.next_id(), 1_000);
        assert_eq!(ids.next_id(), 1_001);
        assert_eq!(ids.next_id(), 1_002);
    }

    #[test]
    fn test_unique_across_threads() {
        let ids = Arc::new(IdGenerator::new(Arc::new(SystemClock)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..500).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 4_000);
    }
}
