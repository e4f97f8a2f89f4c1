//! Calculation report models.
//!
//! A [`CalculationReport`] wraps a [`PayrollResult`] with the identity,
//! timestamp, and audit trace of the calculation that produced it. The
//! result itself carries none of these so that computing it stays a pure
//! function of the input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayrollResult;

/// A single step in the audit trace recording one stage of the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// Stable identifier of the rule applied (e.g. `"social_security"`).
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The statute the rule comes from.
    pub legal_ref: String,
    /// The values the rule consumed.
    pub input: serde_json::Value,
    /// The values the rule produced.
    pub output: serde_json::Value,
    /// Human-readable explanation of the arithmetic.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use nomina_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The calculation stages in the order they ran.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the step recorded for `rule_id`, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}

/// The full response for one calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The computed salary breakdown.
    pub result: PayrollResult,
    /// Audit trace of the calculation stages.
    pub audit_trace: AuditTrace,
}
