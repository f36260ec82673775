//! Session-scoped history of saved splits.
//!
//! Records are kept newest first and are never recomputed: a saved split
//! keeps the amount it was saved with.

use std::collections::VecDeque;

use tracing::debug;

use crate::Amount;
use crate::model::{SplitId, SplitInput, SplitRecord};

mod clock;
pub use clock::{Clock, SystemClock};
use clock::IdGenerator;

/// Ordered log of saved splits, newest first.
#[derive(Debug)]
pub struct SplitHistory<C: Clock = SystemClock> {
    records: VecDeque<SplitRecord>,
    ids: IdGenerator,
    clock: C,
}

impl SplitHistory {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SplitHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SplitHistory<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            records: VecDeque::new(),
            ids: IdGenerator::default(),
            clock,
        }
    }

    /// Record `input` with the amount the caller already computed for it and
    /// return the new record, which is now at the front of [`Self::list`].
    pub fn save(&mut self, input: &SplitInput, per_person: Amount) -> &SplitRecord {
        let id = self.ids.next(&self.clock);
        debug!(id = %id, per_person = %per_person, "split recorded");

        self.records.push_front(SplitRecord::snapshot(id, input, per_person));
        &self.records[0]
    }

    /// Saved splits, newest first. Saving is O(1) regardless of length.
    pub fn list(&self) -> &VecDeque<SplitRecord> {
        &self.records
    }

    /// The most recently saved split.
    pub fn latest(&self) -> Option<&SplitRecord> {
        self.records.front()
    }

    pub fn get(&self, id: SplitId) -> Option<&SplitRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        debug!(dropped = self.records.len(), "history cleared");
        self.records.clear();
    }
}
