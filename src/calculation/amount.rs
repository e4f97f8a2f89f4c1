//! Lenient parsing of monetary amounts entered as text.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use super::isr::MONTHS_PER_YEAR;

/// Largest magnitude accepted by [`parse_amount`] (10^20).
///
/// Annualising an amount multiplies it by twelve; capping inputs well below
/// `Decimal::MAX` keeps every downstream computation inside the representable
/// range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x6310_0000, 0x6BC7_5E2D, 0x5, false, 0);

/// Parses a decimal amount, falling back to zero when the text is not a number.
///
/// Surrounding whitespace is ignored and scientific notation (`"1.5e3"`) is
/// accepted. Empty, malformed, or out-of-range text yields zero instead of an
/// error. Negative amounts are returned unchanged.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::parse_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_amount("1500.50"), Decimal::from_str("1500.50").unwrap());
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    // `Decimal::from_str` skips underscores anywhere in the text
    if has_stray_underscore(trimmed) {
        debug!(raw = %trimmed, "Misplaced digit separator, using zero");
        return Decimal::ZERO;
    }

    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(amount) => bound_amount(amount),
        Err(err) => {
            debug!(raw = %trimmed, error = %err, "Unparseable amount, using zero");
            Decimal::ZERO
        }
    }
}

/// Returns `amount` unchanged if its magnitude is within [`MAX_AMOUNT`],
/// otherwise zero.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::{MAX_AMOUNT, bound_amount};
/// use rust_decimal::Decimal;
///
/// assert_eq!(bound_amount(MAX_AMOUNT), MAX_AMOUNT);
/// assert_eq!(bound_amount(Decimal::MAX), Decimal::ZERO);
/// ```
pub fn bound_amount(amount: Decimal) -> Decimal {
    if amount.abs() <= MAX_AMOUNT {
        amount
    } else {
        debug!(%amount, "Amount out of range, using zero");
        Decimal::ZERO
    }
}

/// Converts a monthly amount to its annual equivalent, or zero when the
/// product is not representable.
pub(crate) fn annualise(monthly: Decimal) -> Decimal {
    monthly.checked_mul(MONTHS_PER_YEAR).unwrap_or_else(|| {
        debug!(%monthly, "Annual amount overflows, using zero");
        Decimal::ZERO
    })
}

/// An underscore is only a digit separator when it sits between two digits.
fn has_stray_underscore(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        let between_digits = i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        b == b'_' && !between_digits
    })
}
