//! Core domain types for the split calculator.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Amount;

/// Tip pre-filled into a fresh input.
pub const DEFAULT_TIP_PERCENTAGE: &str = "15";

/// How the per-person amount is rounded to a whole currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Keep the exact amount.
    #[default]
    None,
    /// Round toward positive infinity.
    Up,
    /// Round toward negative infinity.
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rounding mode '{0}', expected none, up or down")]
pub struct ParseRoundingModeError(pub String);

impl FromStr for RoundingMode {
    type Err = ParseRoundingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(RoundingMode::None),
            "up" => Ok(RoundingMode::Up),
            "down" => Ok(RoundingMode::Down),
            _ => Err(ParseRoundingModeError(s.to_string())),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::None => "none",
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
        };
        f.write_str(name)
    }
}

/// Raw field values as typed by the user.
///
/// Nothing is validated here; the calculator decides how to read each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitInput {
    pub bill_amount: String,
    pub num_people: String,
    pub tip_percentage: String,
    pub rounding_mode: RoundingMode,
}

impl SplitInput {
    pub fn new(
        bill_amount: impl Into<String>,
        num_people: impl Into<String>,
        tip_percentage: impl Into<String>,
    ) -> Self {
        Self {
            bill_amount: bill_amount.into(),
            num_people: num_people.into(),
            tip_percentage: tip_percentage.into(),
            rounding_mode: RoundingMode::None,
        }
    }

    pub fn with_rounding(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }
}

impl Default for SplitInput {
    fn default() -> Self {
        Self::new("", "", DEFAULT_TIP_PERCENTAGE)
    }
}

/// Identifier of a saved split: milliseconds since the Unix epoch, bumped
/// past the previous id when saves share a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SplitId(pub u64);

impl fmt::Display for SplitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved split. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRecord {
    id: SplitId,
    bill_amount: String,
    num_people: String,
    tip_percentage: String,
    rounding_mode: RoundingMode,
    per_person: Amount,
}

impl SplitRecord {
    /// Snapshot `input` together with the amount already computed for it.
    pub(crate) fn snapshot(id: SplitId, input: &SplitInput, per_person: Amount) -> Self {
        Self {
            id,
            bill_amount: input.bill_amount.clone(),
            num_people: input.num_people.clone(),
            tip_percentage: input.tip_percentage.clone(),
            rounding_mode: input.rounding_mode,
            per_person,
        }
    }

    pub fn id(&self) -> SplitId {
        self.id
    }

    pub fn bill_amount(&self) -> &str {
        &self.bill_amount
    }

    pub fn num_people(&self) -> &str {
        &self.num_people
    }

    pub fn tip_percentage(&self) -> &str {
        &self.tip_percentage
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    pub fn per_person(&self) -> Amount {
        self.per_person
    }
}

/// A single action coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Replace the bill text.
    SetBill(String),
    /// Replace the party size text.
    SetPeople(String),
    /// Replace the tip percentage text.
    SetTip(String),
    /// Pick a rounding mode.
    SetRounding(RoundingMode),
    /// Save the current split into history.
    Save,
    /// Drop all saved splits.
    Clear,
}
