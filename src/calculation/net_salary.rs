//! Net salary.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayrollInput};

/// Computes take-home pay from the input and the three derived amounts.
///
/// `gross - social_security - isr_monthly - other_deductions + bonus_monthly`
pub fn compute_net_salary(
    input: &PayrollInput,
    social_security: Decimal,
    isr_monthly: Decimal,
    bonus_monthly: Decimal,
) -> Decimal {
    input.gross_salary - social_security - isr_monthly - input.other_deductions + bonus_monthly
}

pub(crate) fn net_salary_audit_step(
    input: &PayrollInput,
    social_security: Decimal,
    isr_monthly: Decimal,
    bonus_monthly: Decimal,
    net_salary: Decimal,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        legal_ref: "Código de Trabajo".to_string(),
        input: serde_json::json!({
            "gross_salary": input.gross_salary.normalize().to_string(),
            "social_security": social_security.normalize().to_string(),
            "isr_monthly": isr_monthly.normalize().to_string(),
            "other_deductions": input.other_deductions.normalize().to_string(),
            "bonus_monthly": bonus_monthly.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "RD${} - RD${} - RD${} - RD${} + RD${} = RD${}",
            input.gross_salary.normalize(),
            social_security.normalize(),
            isr_monthly.normalize(),
            input.other_deductions.normalize(),
            bonus_monthly.normalize(),
            net_salary.normalize()
        ),
    }
}
