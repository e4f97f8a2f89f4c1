//! Core data models for the payroll engine.

mod calculation_report;
mod payroll;
mod tax_bracket;

pub use calculation_report::{AuditStep, AuditTrace, CalculationReport};
pub use payroll::{PayrollInput, PayrollResult};
pub use tax_bracket::{BoundaryGap, IsrSchedule, TaxBracket};
