//! Explicit store for everything the presentation layer edits.
//!
//! A session holds the raw text of the input fields and the history of saved
//! splits. The presentation layer feeds it [`SessionEvent`]s and renders
//! [`Session::preview`] and [`Session::history`].

use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::Amount;
use crate::calculator::compute_split;
use crate::history::{Clock, SplitHistory, SystemClock};
use crate::model::{SessionEvent, SplitInput, SplitRecord};

/// Current input plus saved splits.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    input: SplitInput,
    history: SplitHistory<C>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_history(SplitHistory::new())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Session<C> {
    pub fn with_history(history: SplitHistory<C>) -> Self {
        Self {
            input: SplitInput::default(),
            history,
        }
    }

    pub fn input(&self) -> &SplitInput {
        &self.input
    }

    pub fn history(&self) -> &SplitHistory<C> {
        &self.history
    }

    /// Live per-person amount for the current input.
    pub fn preview(&self) -> Amount {
        compute_split(&self.input)
    }

    /// Run the session over the given event stream.
    pub async fn run(&mut self, mut stream: impl Stream<Item = SessionEvent> + Unpin) {
        while let Some(event) = stream.next().await {
            self.apply(event);
        }
    }

    /// Apply a single event. Returns the new record when the event was a save.
    pub fn apply(&mut self, event: SessionEvent) -> Option<&SplitRecord> {
        match event {
            SessionEvent::SetBill(text) => {
                info!(bill = %text, "bill edited");
                self.input.bill_amount = text;
            }
            SessionEvent::SetPeople(text) => {
                info!(people = %text, "party size edited");
                self.input.num_people = text;
            }
            SessionEvent::SetTip(text) => {
                info!(tip = %text, "tip edited");
                self.input.tip_percentage = text;
            }
            SessionEvent::SetRounding(mode) => {
                info!(rounding = %mode, "rounding changed");
                self.input.rounding_mode = mode;
            }
            SessionEvent::Save => return Some(self.save()),
            SessionEvent::Clear => {
                info!(dropped = self.history.len(), "history cleared");
                self.history.clear();
            }
        }
        None
    }

    /// Save the current input with its freshly computed amount.
    pub fn save(&mut self) -> &SplitRecord {
        let per_person = self.preview();
        let record = self.history.save(&self.input, per_person);
        info!(
            id = %record.id(),
            bill = %record.bill_amount(),
            people = %record.num_people(),
            tip = %record.tip_percentage(),
            per_person = %record.per_person(),
            "split saved"
        );
        record
    }
}
