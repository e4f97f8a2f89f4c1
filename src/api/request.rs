//! Request types for the payroll API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_amount;
use crate::models::PayrollInput;

/// An amount as typed into a form: either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number.
    Number(serde_json::Number),
    /// A string, parsed leniently.
    Text(String),
}

impl RawAmount {
    /// Resolves the amount, substituting zero when it does not parse.
    pub fn resolve(&self) -> Decimal {
        match self {
            RawAmount::Number(number) => parse_amount(&number.to_string()),
            RawAmount::Text(text) => parse_amount(text),
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Missing or `null` fields count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly gross salary.
    #[serde(default)]
    pub gross_salary: Option<RawAmount>,
    /// Other monthly deductions.
    #[serde(default)]
    pub other_deductions: Option<RawAmount>,
}

impl From<CalculationRequest> for PayrollInput {
    fn from(req: CalculationRequest) -> Self {
        let resolve = |amount: Option<RawAmount>| {
            amount.as_ref().map_or(Decimal::ZERO, RawAmount::resolve)
        };
        PayrollInput::new(resolve(req.gross_salary), resolve(req.other_deductions))
    }
}
