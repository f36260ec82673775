use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed-point decimal with 4 decimal places, stored as a scaled integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

/// Errors returned when parsing an [`Amount`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount '{0}'")]
    Invalid(String),
    #[error("amount '{0}' is out of range")]
    Overflow(String),
}

impl Amount {
    pub const SCALE: i64 = 10_000;
    pub const DECIMALS: u32 = 4;

    pub const ZERO: Amount = Amount(0);
    pub const MAX: Amount = Amount(i64::MAX);
    pub const MIN: Amount = Amount(i64::MIN);

    pub fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub fn from_whole(value: i64) -> Self {
        Amount(value.saturating_mul(Self::SCALE))
    }

    pub fn scaled(self) -> i64 {
        self.0
    }

    /// True when the amount has no fractional part.
    pub fn is_whole(self) -> bool {
        self.0 % Self::SCALE == 0
    }

    /// Render with `decimals` fractional digits (at most 4), rounding half
    /// away from zero.
    pub fn to_fixed(self, decimals: u32) -> String {
        let decimals = decimals.min(Self::DECIMALS);
        let step = 10_i128.pow(Self::DECIMALS - decimals);
        let value = i128::from(self.0);
        let mut units = value / step;
        if 2 * (value % step).abs() >= step {
            units += value.signum();
        }

        let sign = if units < 0 { "-" } else { "" };
        let abs = units.abs();
        let divisor = 10_i128.pow(decimals);
        let whole = abs / divisor;
        if decimals == 0 {
            return format!("{sign}{whole}");
        }
        let frac = abs % divisor;
        let width = decimals as usize;
        format!("{sign}{whole}.{frac:0width$}")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();
        let whole = abs / scale;
        let frac = abs % scale;
        write!(f, "{sign}{whole}.{frac:04}")
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAmountError::Empty);
        }

        let (negative, body) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(ParseAmountError::Invalid(s.to_string()));
        }

        let overflow = || ParseAmountError::Overflow(s.to_string());

        let mut scaled: i128 = 0;
        for b in int_part.bytes() {
            scaled = scaled * 10 + i128::from(b - b'0');
            if scaled > i128::from(i64::MAX) {
                return Err(overflow());
            }
        }

        let mut frac_digits = frac_part.bytes();
        for _ in 0..Self::DECIMALS {
            let digit = frac_digits.next().map_or(0, |b| b - b'0');
            scaled = scaled * 10 + i128::from(digit);
        }
        // first dropped digit decides rounding, half away from zero
        if frac_digits.next().is_some_and(|b| b >= b'5') {
            scaled += 1;
        }

        if negative {
            scaled = -scaled;
        }
        i64::try_from(scaled).map(Amount).map_err(|_| overflow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scaled_preserves_value() {
        let amount = Amount::from_scaled(123456);
        assert_eq!(amount, Amount(123456));
    }

    #[test]
    fn from_whole_scales() {
        assert_eq!(Amount::from_whole(29), Amount::from_scaled(290_000));
        assert_eq!(Amount::from_whole(-3), Amount::from_scaled(-30_000));
        assert_eq!(Amount::from_whole(i64::MAX), Amount::MAX);
    }

    #[test]
    fn parse_whole_and_fractional() {
        assert_eq!("100".parse(), Ok(Amount::from_scaled(1_000_000)));
        assert_eq!("28.75".parse(), Ok(Amount::from_scaled(287_500)));
        assert_eq!("0.0001".parse(), Ok(Amount::from_scaled(1)));
        assert_eq!("+1.5".parse(), Ok(Amount::from_scaled(15_000)));
        assert_eq!("-50.25".parse(), Ok(Amount::from_scaled(-502_500)));
    }

    #[test]
    fn parse_accepts_bare_point_forms() {
        assert_eq!("12.".parse(), Ok(Amount::from_scaled(120_000)));
        assert_eq!(".5".parse(), Ok(Amount::from_scaled(5_000)));
    }

    #[test]
    fn parse_rounds_extra_digits() {
        assert_eq!("1.23456".parse(), Ok(Amount::from_scaled(12346)));
        assert_eq!("1.23454".parse(), Ok(Amount::from_scaled(12345)));
        assert_eq!("-1.23455".parse(), Ok(Amount::from_scaled(-12346)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Amount>(), Err(ParseAmountError::Empty));
        for text in [".", "-", "abc", "1.2.3", "1e5", " 1", "1 ", "--1"] {
            assert!(
                matches!(text.parse::<Amount>(), Err(ParseAmountError::Invalid(_))),
                "{text:?} should be invalid"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(matches!(
            "99999999999999999999".parse::<Amount>(),
            Err(ParseAmountError::Overflow(_))
        ));
        assert!(matches!(
            "922337203685478".parse::<Amount>(),
            Err(ParseAmountError::Overflow(_))
        ));
    }

    #[test]
    fn display_formats_positive() {
        assert_eq!(Amount::from_scaled(1_000_000).to_string(), "100.0000");
        assert_eq!(Amount::from_scaled(15_000).to_string(), "1.5000");
        assert_eq!(Amount::from_scaled(1).to_string(), "0.0001");
        assert_eq!(Amount::from_scaled(0).to_string(), "0.0000");
    }

    #[test]
    fn display_formats_negative() {
        assert_eq!(Amount::from_scaled(-502_500).to_string(), "-50.2500");
        assert_eq!(Amount::from_scaled(-1).to_string(), "-0.0001");
        assert_eq!(Amount::MIN.to_string(), "-922337203685477.5808");
    }

    #[test]
    fn to_fixed_rounds_half_away_from_zero() {
        assert_eq!(Amount::from_scaled(287_500).to_fixed(2), "28.75");
        assert_eq!(Amount::from_scaled(287_550).to_fixed(2), "28.76");
        assert_eq!(Amount::from_scaled(-287_550).to_fixed(2), "-28.76");
        assert_eq!(Amount::from_scaled(333_333).to_fixed(2), "33.33");
        assert_eq!(Amount::from_scaled(290_000).to_fixed(0), "29");
        assert_eq!(Amount::from_scaled(1).to_fixed(9), "0.0001");
        assert_eq!(Amount::from_scaled(-40).to_fixed(2), "0.00");
    }

    #[test]
    fn is_whole() {
        assert!(Amount::from_whole(28).is_whole());
        assert!(Amount::ZERO.is_whole());
        assert!(!Amount::from_scaled(287_500).is_whole());
        assert!(!Amount::from_scaled(-1).is_whole());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn negative_ordering() {
        let negative = Amount::from_scaled(-100);
        let zero = Amount::from_scaled(0);
        let positive = Amount::from_scaled(100);
        assert!(negative < zero);
        assert!(zero < positive);
        assert!(negative < positive);
    }
}
