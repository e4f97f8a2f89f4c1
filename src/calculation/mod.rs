//! Calculation logic for the payroll engine.
//!
//! This module contains the lenient amount parser, the three statutory
//! computations (social security, income tax, bonus), the net salary formula,
//! and the pipeline that runs them in order.

mod amount;
mod bonus;
mod calculator;
mod isr;
mod net_salary;
mod social_security;

pub use amount::{MAX_AMOUNT, bound_amount, parse_amount};
pub use bonus::{BONUS_LEGAL_REF, BONUS_RATE, compute_monthly_bonus};
pub use calculator::{AuditedPayroll, calculate_all, calculate_with_audit};
pub use isr::{
    DGII_BRACKETS, ISR_LEGAL_REF, MONTHS_PER_YEAR, compute_annual_isr, compute_monthly_isr,
    dgii_schedule,
};
pub use net_salary::compute_net_salary;
pub use social_security::{
    SOCIAL_SECURITY_LEGAL_REF, SOCIAL_SECURITY_RATE, compute_social_security,
};
