//! The net salary pipeline.
//!
//! Runs the four stages in dependency order: social security, ISR, bonus,
//! then net salary (which needs the other three).

use tracing::debug;

use super::bonus::{bonus_audit_step, compute_monthly_bonus};
use super::isr::{compute_monthly_isr, isr_audit_step};
use super::net_salary::{compute_net_salary, net_salary_audit_step};
use super::social_security::{compute_social_security, social_security_audit_step};
use crate::models::{AuditStep, PayrollInput, PayrollResult};

/// A payroll result together with the audit steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditedPayroll {
    /// The computed salary breakdown.
    pub result: PayrollResult,
    /// One step per stage, in the order the stages ran.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the full salary breakdown for one input.
///
/// This is a pure function: identical inputs always produce identical results.
/// Amounts beyond [`MAX_AMOUNT`](super::MAX_AMOUNT) are treated as zero.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::calculate_all;
/// use nomina_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let result = calculate_all(&PayrollInput::from_raw("30000", "500"));
/// assert_eq!(result.social_security, Decimal::from(1773));
/// assert_eq!(result.isr_monthly, Decimal::ZERO);
/// assert_eq!(result.bonus_monthly, Decimal::from(3000));
/// assert_eq!(result.net_salary, Decimal::from(30727));
/// ```
pub fn calculate_all(input: &PayrollInput) -> PayrollResult {
    let input = &input.bounded();
    let social_security = compute_social_security(input.gross_salary);
    let isr_monthly = compute_monthly_isr(input.gross_salary);
    let bonus_monthly = compute_monthly_bonus(input.gross_salary);
    let net_salary = compute_net_salary(input, social_security, isr_monthly, bonus_monthly);

    debug!(
        gross_salary = %input.gross_salary,
        other_deductions = %input.other_deductions,
        %net_salary,
        "Computed net salary"
    );

    PayrollResult {
        gross_salary: input.gross_salary,
        other_deductions: input.other_deductions,
        social_security,
        isr_monthly,
        bonus_monthly,
        net_salary,
    }
}

/// Computes the salary breakdown and records an audit step for each stage.
///
/// The result is identical to [`calculate_all`] for the same input.
pub fn calculate_with_audit(input: &PayrollInput) -> AuditedPayroll {
    let input = &input.bounded();
    let result = calculate_all(input);
    let gross_salary = input.gross_salary;

    let audit_steps = vec![
        social_security_audit_step(gross_salary, result.social_security, 1),
        isr_audit_step(gross_salary, result.isr_monthly, 2),
        bonus_audit_step(gross_salary, result.bonus_monthly, 3),
        net_salary_audit_step(
            input,
            result.social_security,
            result.isr_monthly,
            result.bonus_monthly,
            result.net_salary,
            4,
        ),
    ];

    AuditedPayroll {
        result,
        audit_steps,
    }
}
