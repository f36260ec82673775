//! Lenient readers for free-form text fields.
//!
//! Both readers skip leading whitespace and take the longest numeric prefix,
//! ignoring whatever follows it. Text with no leading number yields `None`.

use crate::Amount;

/// Exponents past this magnitude only add zeros beyond `Amount`'s range or
/// resolution.
const MAX_EXPONENT: usize = 64;

/// Read a decimal such as `12.5` or `1.2e3` from the start of `text`.
///
/// Values outside `Amount`'s range yield `None`.
pub fn leading_decimal(text: &str) -> Option<Amount> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let sign = sign_len(bytes);
    let int_digits = digit_run(&bytes[sign..]);
    let mut end = sign + int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let int_part = &text[sign..sign + int_digits];
    let frac_part = &text[end - frac_digits..end];
    let exponent = leading_exponent(&bytes[end..]).unwrap_or(0);

    // move the decimal point so the result fits `Amount`'s own grammar
    let digits = format!("{int_part}{frac_part}");
    let point = int_part.len() as isize + exponent;
    let shifted = match usize::try_from(point) {
        Err(_) => format!("0.{}{digits}", "0".repeat(point.unsigned_abs())),
        Ok(point) if point >= digits.len() => {
            format!("{digits}{}", "0".repeat(point - digits.len()))
        }
        Ok(point) => format!("{}.{}", &digits[..point], &digits[point..]),
    };

    let magnitude: Amount = shifted.parse().ok()?;
    Some(if &text[..sign] == "-" {
        Amount::from_scaled(-magnitude.scaled())
    } else {
        magnitude
    })
}

/// Read an `e`/`E` exponent with at least one digit. Magnitudes are capped at
/// [`MAX_EXPONENT`].
fn leading_exponent(bytes: &[u8]) -> Option<isize> {
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return None;
    }
    let bytes = &bytes[1..];
    let sign = sign_len(bytes);
    let digits = &bytes[sign..sign + digit_run(&bytes[sign..])];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .try_fold(0_usize, |acc, b| {
            let acc = acc * 10 + usize::from(b - b'0');
            (acc <= MAX_EXPONENT).then_some(acc)
        })
        .unwrap_or(MAX_EXPONENT + 1) as isize;

    Some(if bytes[0] == b'-' { -magnitude } else { magnitude })
}

/// Read a whole number such as `4` from the start of `text`.
///
/// A fractional tail is dropped, so `"2.9"` reads as 2.
pub fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
