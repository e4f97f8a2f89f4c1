//! Estimated monthly bonus (bonificación).
//!
//! The bonus is estimated as 10% of the annual gross salary and prorated over
//! twelve months.

use rust_decimal::Decimal;
use tracing::debug;

use super::amount::annualise;
use super::isr::MONTHS_PER_YEAR;
use crate::models::AuditStep;

/// Share of the annual gross salary paid as bonus: 10%.
pub const BONUS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Statute the bonus comes from.
pub const BONUS_LEGAL_REF: &str = "Código de Trabajo Art. 223";

/// Computes the estimated monthly bonus.
///
/// The amount is annualised, the rate applied, and the result divided back
/// over twelve months. This equals `gross_salary * 0.10`.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::compute_monthly_bonus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_monthly_bonus(Decimal::from(30000)), Decimal::from(3000));
/// ```
pub fn compute_monthly_bonus(gross_salary: Decimal) -> Decimal {
    let annual_bonus = annualise(gross_salary) * BONUS_RATE;
    let monthly_bonus = annual_bonus / MONTHS_PER_YEAR;
    debug!(%gross_salary, %annual_bonus, %monthly_bonus, "Computed bonus");
    monthly_bonus
}

pub(crate) fn bonus_audit_step(
    gross_salary: Decimal,
    monthly_bonus: Decimal,
    step_number: u32,
) -> AuditStep {
    let annual_bonus = annualise(gross_salary) * BONUS_RATE;

    AuditStep {
        step_number,
        rule_id: "bonus".to_string(),
        rule_name: "Estimated Bonus".to_string(),
        legal_ref: BONUS_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "rate": BONUS_RATE.to_string()
        }),
        output: serde_json::json!({
            "bonus_annual": annual_bonus.normalize().to_string(),
            "bonus_monthly": monthly_bonus.normalize().to_string()
        }),
        reasoning: format!(
            "RD${} x 12 x {} = RD${} per year; / 12 = RD${}",
            gross_salary.normalize(),
            BONUS_RATE,
            annual_bonus.normalize(),
            monthly_bonus.normalize()
        ),
    }
}
