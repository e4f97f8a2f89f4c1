//! Income tax (ISR) withholding.
//!
//! Salaried income is taxed on an annual basis using the progressive scale
//! published by the DGII. The monthly withholding is the annual tax on twelve
//! times the monthly gross salary, divided back by twelve.
//!
//! The scale's base taxes are fixed constants rather than values derived from
//! the bracket below. They do not line up exactly with the lower brackets, so
//! the tax jumps by -0.35 at 624,329 and by +1.20 at 867,123. The jumps are
//! part of the published schedule and are reproduced as-is; see
//! [`IsrSchedule::boundary_gaps`].

use rust_decimal::Decimal;
use tracing::debug;

use super::amount::annualise;
use crate::models::{AuditStep, IsrSchedule, TaxBracket};

/// Number of months salary is annualised over.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Statute the income tax scale comes from.
pub const ISR_LEGAL_REF: &str = "Ley 11-92 Art. 296";

/// The DGII annual salary scale, lowest bracket first.
///
/// | Annual salary          | Tax                              |
/// |------------------------|----------------------------------|
/// | up to 416,220          | exempt                           |
/// | 416,220.01 - 624,329   | 15% of excess over 416,220       |
/// | 624,329.01 - 867,123   | 31,216 + 20% of excess over 624,329 |
/// | over 867,123           | 79,776 + 25% of excess over 867,123 |
pub const DGII_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(416_220, 0, 0, false, 0)),
        base_tax: Decimal::ZERO,
        marginal_rate: Decimal::ZERO,
        bracket_floor: Decimal::ZERO,
    },
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(624_329, 0, 0, false, 0)),
        base_tax: Decimal::ZERO,
        marginal_rate: Decimal::from_parts(15, 0, 0, false, 2),
        bracket_floor: Decimal::from_parts(416_220, 0, 0, false, 0),
    },
    TaxBracket {
        upper_bound: Some(Decimal::from_parts(867_123, 0, 0, false, 0)),
        base_tax: Decimal::from_parts(31_216, 0, 0, false, 0),
        marginal_rate: Decimal::from_parts(20, 0, 0, false, 2),
        bracket_floor: Decimal::from_parts(624_329, 0, 0, false, 0),
    },
    TaxBracket {
        upper_bound: None,
        base_tax: Decimal::from_parts(79_776, 0, 0, false, 0),
        marginal_rate: Decimal::from_parts(25, 0, 0, false, 2),
        bracket_floor: Decimal::from_parts(867_123, 0, 0, false, 0),
    },
];

static DGII_SCHEDULE: IsrSchedule = IsrSchedule::from_static(&DGII_BRACKETS);

/// Returns the DGII salary scale used by every calculation.
pub fn dgii_schedule() -> &'static IsrSchedule {
    &DGII_SCHEDULE
}

/// Computes the income tax owed on an annual salary.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::compute_annual_isr;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(compute_annual_isr(Decimal::from(416220)), Decimal::ZERO);
/// assert_eq!(
///     compute_annual_isr(Decimal::from(960000)),
///     Decimal::from_str("102995.25").unwrap()
/// );
/// ```
pub fn compute_annual_isr(annual_salary: Decimal) -> Decimal {
    dgii_schedule().tax_for(annual_salary)
}

/// Computes the monthly ISR withholding for a monthly gross salary.
pub fn compute_monthly_isr(gross_salary: Decimal) -> Decimal {
    let annual_salary = annualise(gross_salary);
    let (bracket_index, _) = dgii_schedule().bracket_for(annual_salary);
    let annual_isr = compute_annual_isr(annual_salary);
    let monthly_isr = annual_isr / MONTHS_PER_YEAR;
    debug!(
        %gross_salary,
        %annual_salary,
        bracket_index,
        %annual_isr,
        %monthly_isr,
        "Computed ISR"
    );
    monthly_isr
}

pub(crate) fn isr_audit_step(
    gross_salary: Decimal,
    monthly_isr: Decimal,
    step_number: u32,
) -> AuditStep {
    let annual_salary = annualise(gross_salary);
    let (bracket_index, bracket) = dgii_schedule().bracket_for(annual_salary);
    let annual_isr = bracket.tax_for(annual_salary);

    let reasoning = if bracket.marginal_rate.is_zero() {
        format!(
            "Annual salary RD${} is within the exempt bracket; no ISR withheld",
            annual_salary.normalize()
        )
    } else {
        format!(
            "RD${} + (RD${} - RD${}) x {} = RD${} per year; / 12 = RD${}",
            bracket.base_tax,
            annual_salary.normalize(),
            bracket.bracket_floor,
            bracket.marginal_rate,
            annual_isr.normalize(),
            monthly_isr.normalize()
        )
    };

    AuditStep {
        step_number,
        rule_id: "isr".to_string(),
        rule_name: "Income Tax (ISR)".to_string(),
        legal_ref: ISR_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "annual_salary": annual_salary.normalize().to_string(),
            "bracket": bracket_index + 1,
            "bracket_floor": bracket.bracket_floor.to_string(),
            "base_tax": bracket.base_tax.to_string(),
            "marginal_rate": bracket.marginal_rate.to_string()
        }),
        output: serde_json::json!({
            "isr_annual": annual_isr.normalize().to_string(),
            "isr_monthly": monthly_isr.normalize().to_string()
        }),
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_dgii_brackets_form_a_valid_schedule() {
        let schedule = IsrSchedule::new(DGII_BRACKETS.to_vec()).unwrap();
        assert_eq!(&schedule, dgii_schedule());
    }

    #[test]
    fn test_exempt_at_first_boundary() {
        assert_eq!(compute_annual_isr(dec("416220")), Decimal::ZERO);
    }

    #[test]
    fn test_one_cent_over_exempt_boundary() {
        assert_eq!(compute_annual_isr(dec("416220.01")), dec("0.0015"));
    }

    #[test]
    fn test_second_bracket_upper_boundary() {
        assert_eq!(compute_annual_isr(dec("624329")), dec("31216.35"));
    }

    #[test]
    fn test_third_bracket_upper_boundary() {
        assert_eq!(compute_annual_isr(dec("867123")), dec("79774.8"));
    }

    #[test]
    fn test_third_bracket_midpoint() {
        // 31216 + (700000 - 624329) * 0.20 = 31216 + 15134.2
        assert_eq!(compute_annual_isr(dec("700000")), dec("46350.2"));
    }

    #[test]
    fn test_top_bracket() {
        assert_eq!(compute_annual_isr(dec("960000")), dec("102995.25"));
    }

    #[test]
    fn test_tax_drops_just_above_624329() {
        let at_boundary = compute_annual_isr(dec("624329"));
        let above = compute_annual_isr(dec("624329.01"));
        assert_eq!(above, dec("31216.002"));
        assert!(above < at_boundary);
    }

    #[test]
    fn test_tax_jumps_just_above_867123() {
        let at_boundary = compute_annual_isr(dec("867123"));
        let above = compute_annual_isr(dec("867123.01"));
        assert_eq!(above, dec("79776.0025"));
        assert_eq!(above - at_boundary, dec("1.2025"));
    }

    #[test]
    fn test_boundary_gaps_of_published_scale() {
        let gaps = dgii_schedule().boundary_gaps();
        let values: Vec<Decimal> = gaps.iter().map(|g| g.gap).collect();
        assert_eq!(values, vec![dec("0"), dec("-0.35"), dec("1.2")]);
    }

    #[test]
    fn test_negative_annual_salary_is_exempt() {
        assert_eq!(compute_annual_isr(dec("-50000")), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_isr_below_threshold() {
        assert_eq!(compute_monthly_isr(dec("30000")), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_isr_top_bracket() {
        assert_eq!(compute_monthly_isr(dec("80000")), dec("8582.9375"));
    }

    #[test]
    fn test_monthly_isr_second_bracket() {
        // 50000 * 12 = 600000; (600000 - 416220) * 0.15 = 27567; / 12 = 2297.25
        assert_eq!(compute_monthly_isr(dec("50000")), dec("2297.25"));
    }

    #[test]
    fn test_monthly_isr_on_unrepresentable_annual_salary_is_zero() {
        assert_eq!(compute_monthly_isr(Decimal::MAX), Decimal::ZERO);
        assert_eq!(compute_monthly_isr(Decimal::MIN), Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_for_exempt_salary() {
        let step = isr_audit_step(dec("30000"), Decimal::ZERO, 2);
        assert_eq!(step.rule_id, "isr");
        assert_eq!(step.input["bracket"], 1);
        assert_eq!(step.input["annual_salary"].as_str().unwrap(), "360000");
        assert!(step.reasoning.contains("exempt"));
    }

    #[test]
    fn test_audit_step_for_top_bracket() {
        let step = isr_audit_step(dec("80000"), dec("8582.9375"), 2);
        assert_eq!(step.input["bracket"], 4);
        assert_eq!(step.input["base_tax"].as_str().unwrap(), "79776");
        assert_eq!(step.output["isr_annual"].as_str().unwrap(), "102995.25");
        assert_eq!(step.output["isr_monthly"].as_str().unwrap(), "8582.9375");
        assert!(step.reasoning.contains("0.25"));
    }
}
