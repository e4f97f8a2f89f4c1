//! Social security (TSS) withholding.
//!
//! The employee share of the Sistema Dominicano de Seguridad Social is a flat
//! percentage of the monthly gross salary: 2.87% for the pension fund (AFP)
//! plus 3.04% for health insurance (SFS).

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::AuditStep;

/// Employee social security rate: 5.91% of gross salary.
pub const SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(591, 0, 0, false, 4);

/// Statute the withholding comes from.
pub const SOCIAL_SECURITY_LEGAL_REF: &str = "Ley 87-01";

/// Computes the monthly social security withholding.
///
/// No cap or floor is applied.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::compute_social_security;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_social_security(Decimal::from(30000)), Decimal::from(1773));
/// ```
pub fn compute_social_security(gross_salary: Decimal) -> Decimal {
    let amount = gross_salary * SOCIAL_SECURITY_RATE;
    debug!(%gross_salary, %amount, "Computed social security");
    amount
}

pub(crate) fn social_security_audit_step(
    gross_salary: Decimal,
    amount: Decimal,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security (TSS)".to_string(),
        legal_ref: SOCIAL_SECURITY_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "rate": SOCIAL_SECURITY_RATE.to_string()
        }),
        output: serde_json::json!({
            "social_security": amount.normalize().to_string()
        }),
        reasoning: format!(
            "RD${} x {} = RD${}",
            gross_salary.normalize(),
            SOCIAL_SECURITY_RATE,
            amount.normalize()
        ),
    }
}
