use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::SplitId;

/// Source of wall-clock time for split identifiers.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // a clock set before 1970 reads as 0; ids stay unique through the tie-break
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

impl<F: Fn() -> u64> Clock for F {
    fn now_millis(&self) -> u64 {
        self()
    }
}

/// Hands out time-derived ids that strictly increase, even when several
/// saves land on the same millisecond or the clock steps backwards.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub(crate) fn next(&mut self, clock: &impl Clock) -> SplitId {
        let now = clock.now_millis();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        SplitId(id)
    }
}
