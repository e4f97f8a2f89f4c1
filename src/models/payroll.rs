//! Payroll input and result models.
//!
//! This module defines the [`PayrollInput`] supplied by the caller and the
//! [`PayrollResult`] derived from it. Both are plain value types: a fresh input
//! is built for every calculation and the result replaces any earlier one.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::{bound_amount, parse_amount};

/// The two amounts a net salary calculation starts from.
///
/// # Example
///
/// ```
/// use nomina_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::from_raw("30000", "not a number");
/// assert_eq!(input.gross_salary, Decimal::from(30000));
/// assert_eq!(input.other_deductions, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly salary before any deductions.
    #[serde(default, deserialize_with = "deserialize_bounded")]
    pub gross_salary: Decimal,
    /// Monthly deductions beyond the statutory ones (loans, insurance, ...).
    #[serde(default, deserialize_with = "deserialize_bounded")]
    pub other_deductions: Decimal,
}

impl PayrollInput {
    /// Creates an input from already-parsed amounts. Amounts beyond
    /// [`MAX_AMOUNT`](crate::calculation::MAX_AMOUNT) are replaced by zero.
    pub fn new(gross_salary: Decimal, other_deductions: Decimal) -> Self {
        Self {
            gross_salary: bound_amount(gross_salary),
            other_deductions: bound_amount(other_deductions),
        }
    }

    /// Returns this input with out-of-range amounts replaced by zero.
    pub fn bounded(&self) -> Self {
        Self::new(self.gross_salary, self.other_deductions)
    }

    /// Creates an input from raw text, substituting zero for any field that
    /// does not parse.
    pub fn from_raw(gross_salary: &str, other_deductions: &str) -> Self {
        Self::new(parse_amount(gross_salary), parse_amount(other_deductions))
    }
}

fn deserialize_bounded<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer).map(bound_amount)
}

/// The outcome of a net salary calculation.
///
/// Echoes the two input amounts next to the four derived ones so a
/// presentation layer can render the whole breakdown from this value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Monthly gross salary, as supplied.
    pub gross_salary: Decimal,
    /// Other monthly deductions, as supplied.
    pub other_deductions: Decimal,
    /// Social security (TSS) withholding.
    pub social_security: Decimal,
    /// Monthly share of the annual income tax (ISR).
    pub isr_monthly: Decimal,
    /// Estimated monthly share of the annual bonus.
    pub bonus_monthly: Decimal,
    /// Take-home pay after withholdings and deductions, bonus included.
    pub net_salary: Decimal,
}

impl PayrollResult {
    /// Returns the statutory withholdings (social security plus ISR).
    pub fn statutory_withholdings(&self) -> Decimal {
        self.social_security + self.isr_monthly
    }

    /// Returns every amount subtracted from the gross salary.
    pub fn total_deductions(&self) -> Decimal {
        self.statutory_withholdings() + self.other_deductions
    }
}
