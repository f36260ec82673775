//! Per-person split calculation.
//!
//! `per_person = bill * (1 + tip / 100) / people`, evaluated on the exact
//! rational value and rounded once at the end.

use std::num::NonZeroU64;

use crate::Amount;
use crate::model::{RoundingMode, SplitInput};
use crate::parse::{leading_decimal, leading_integer};

/// Validated numbers behind a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTerms {
    pub bill: Amount,
    pub people: NonZeroU64,
    /// Tip in percent, e.g. 15 for 15%. Negative values act as a discount.
    pub tip: Amount,
}

impl SplitTerms {
    /// Read the raw input fields.
    ///
    /// Returns `None` when the bill or party size is missing, unreadable, or
    /// the party size is not positive. A missing tip counts as 0%.
    pub fn from_input(input: &SplitInput) -> Option<Self> {
        let bill = leading_decimal(&input.bill_amount)?;
        let people = leading_integer(&input.num_people)
            .and_then(|people| u64::try_from(people).ok())
            .and_then(NonZeroU64::new)?;
        let tip = leading_decimal(&input.tip_percentage).unwrap_or_default();

        Some(Self { bill, people, tip })
    }

    /// Amount each person pays, rounded per `rounding`.
    ///
    /// `None` keeps the finest precision `Amount` can hold, `Up`/`Down` go to
    /// whole currency units. Results beyond `Amount`'s range saturate.
    pub fn per_person(&self, rounding: RoundingMode) -> Amount {
        let scale = i128::from(Amount::SCALE);
        let hundred_percent = 100 * scale;

        // exact value in scaled units is numerator / denominator
        let numerator =
            i128::from(self.bill.scaled()) * (hundred_percent + i128::from(self.tip.scaled()));
        let denominator = hundred_percent * i128::from(self.people.get());

        let scaled = match rounding {
            RoundingMode::None => div_round_half_away(numerator, denominator),
            RoundingMode::Up => div_ceil(numerator, denominator * scale) * scale,
            RoundingMode::Down => numerator.div_euclid(denominator * scale) * scale,
        };

        match i64::try_from(scaled) {
            Ok(value) => Amount::from_scaled(value),
            Err(_) if scaled < 0 => Amount::MIN,
            Err(_) => Amount::MAX,
        }
    }
}

/// Compute the per-person amount for the raw input.
///
/// Never fails: missing or unreadable input and non-positive party sizes all
/// yield zero, so a live preview can always be rendered.
pub fn compute_split(input: &SplitInput) -> Amount {
    SplitTerms::from_input(input)
        .map(|terms| terms.per_person(input.rounding_mode))
        .unwrap_or_default()
}

// `denominator` must be positive in both helpers.

fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if 2 * remainder.abs() >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

fn div_ceil(numerator: i128, denominator: i128) -> i128 {
    -(-numerator).div_euclid(denominator)
}
