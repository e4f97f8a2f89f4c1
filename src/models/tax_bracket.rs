//! Progressive income tax bracket models.
//!
//! An [`IsrSchedule`] is an ordered list of [`TaxBracket`]s. Each bracket
//! carries a precomputed base tax owed at its floor, so the tax for an amount
//! is `base_tax + (amount - bracket_floor) * marginal_rate` of the first
//! bracket whose upper bound covers it.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single tier of a progressive tax schedule.
///
/// # Example
///
/// ```
/// use nomina_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket {
///     upper_bound: Some(Decimal::new(624329, 0)),
///     base_tax: Decimal::ZERO,
///     marginal_rate: Decimal::new(15, 2),
///     bracket_floor: Decimal::new(416220, 0),
/// };
/// assert_eq!(bracket.tax_for(Decimal::new(516220, 0)), Decimal::new(15000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of the tier; `None` means unbounded.
    pub upper_bound: Option<Decimal>,
    /// Tax owed at the tier's floor.
    pub base_tax: Decimal,
    /// Rate applied to the excess over the floor.
    pub marginal_rate: Decimal,
    /// The amount the excess is measured from.
    pub bracket_floor: Decimal,
}

impl TaxBracket {
    /// Returns true if `amount` does not exceed this bracket's upper bound.
    pub fn covers(&self, amount: Decimal) -> bool {
        self.upper_bound.is_none_or(|bound| amount <= bound)
    }

    /// Returns the tax this bracket's formula gives for `amount`.
    pub fn tax_for(&self, amount: Decimal) -> Decimal {
        self.base_tax + (amount - self.bracket_floor) * self.marginal_rate
    }
}

/// The jump in tax owed when crossing from one bracket into the next.
///
/// A schedule whose base taxes were derived from the bracket below has a gap
/// of zero everywhere. A non-zero gap means the hard-coded base tax disagrees
/// with what the lower bracket owes at the shared boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryGap {
    /// The boundary amount (upper bound of the lower bracket).
    pub boundary: Decimal,
    /// Tax owed exactly at the boundary, computed by the lower bracket.
    pub tax_at_boundary: Decimal,
    /// Base tax of the upper bracket.
    pub base_tax_above: Decimal,
    /// `base_tax_above - tax_at_boundary`.
    pub gap: Decimal,
}

/// A validated, ordered progressive tax schedule on an annual basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsrSchedule {
    brackets: Cow<'static, [TaxBracket]>,
}

impl IsrSchedule {
    /// Builds a schedule after checking that the brackets form a proper
    /// progression.
    ///
    /// The brackets must be non-empty, have strictly increasing upper bounds,
    /// leave only the last bracket unbounded, measure each excess from the
    /// previous bracket's upper bound, and carry non-negative rates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] describing the first violation.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let Some(last) = brackets.last() else {
            return Err(invalid("schedule has no brackets"));
        };
        if last.upper_bound.is_some() {
            return Err(invalid("last bracket must be unbounded"));
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.marginal_rate < Decimal::ZERO {
                return Err(invalid(format!("bracket {} has a negative rate", index)));
            }
            if index == 0 {
                continue;
            }

            let Some(previous_bound) = brackets[index - 1].upper_bound else {
                return Err(invalid(format!(
                    "bracket {} is unbounded but is not the last bracket",
                    index - 1
                )));
            };
            if let Some(bound) = bracket.upper_bound {
                if bound <= previous_bound {
                    return Err(invalid(format!(
                        "bracket {} upper bound {} does not exceed {}",
                        index, bound, previous_bound
                    )));
                }
            }
            if bracket.bracket_floor != previous_bound {
                return Err(invalid(format!(
                    "bracket {} floor {} does not match previous upper bound {}",
                    index, bracket.bracket_floor, previous_bound
                )));
            }
        }

        Ok(Self {
            brackets: Cow::Owned(brackets),
        })
    }

    /// Wraps a fixed table known to pass [`IsrSchedule::new`].
    pub(crate) const fn from_static(brackets: &'static [TaxBracket]) -> Self {
        Self {
            brackets: Cow::Borrowed(brackets),
        }
    }

    /// Returns the brackets, lowest first.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the index and bracket that apply to `amount`.
    pub fn bracket_for(&self, amount: Decimal) -> (usize, &TaxBracket) {
        self.brackets
            .iter()
            .enumerate()
            .find(|(_, bracket)| bracket.covers(amount))
            // unreachable for a validated schedule: the last bracket is unbounded
            .unwrap_or_else(|| {
                let index = self.brackets.len() - 1;
                (index, &self.brackets[index])
            })
    }

    /// Returns the tax owed on `amount`.
    pub fn tax_for(&self, amount: Decimal) -> Decimal {
        self.bracket_for(amount).1.tax_for(amount)
    }

    /// Returns the tax jump at every internal boundary, lowest first.
    pub fn boundary_gaps(&self) -> Vec<BoundaryGap> {
        self.brackets
            .windows(2)
            .filter_map(|pair| {
                let boundary = pair[0].upper_bound?;
                let tax_at_boundary = pair[0].tax_for(boundary);
                Some(BoundaryGap {
                    boundary,
                    tax_at_boundary,
                    base_tax_above: pair[1].base_tax,
                    gap: pair[1].base_tax - tax_at_boundary,
                })
            })
            .collect()
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidSchedule {
        message: message.into(),
    }
}
