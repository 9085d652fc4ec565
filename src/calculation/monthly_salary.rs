//! Monthly salary calculation.
//!
//! This module computes the salary breakdown of a single month. Amounts
//! tied to the month (basic pay, TA, HPCA) are prorated by days worked;
//! percentage components follow from the prorated basic pay. Every
//! component is carried unrounded and rounded once, independently, at the end.

use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, MonthEntry, MonthlyResult, SalaryBreakdown, SalaryInput};

use super::allowances::{HPCA_MONTHLY_AMOUNT, SDA_RATE, hra_percentage, ta_amount};
use super::calendar::days_in_month;
use super::deductions::{NPS_EMPLOYEE_RATE, NPS_EMPLOYER_RATE, fixed_deduction};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// The result of calculating one month, including audit steps.
#[derive(Debug, Clone)]
pub struct MonthlySalaryResult {
    /// The rounded result reported for the month.
    pub result: MonthlyResult,
    /// The breakdown before rounding.
    pub unrounded: SalaryBreakdown,
    /// The audit steps recording this calculation, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the salary breakdown for one month.
///
/// The input is expected to have passed [`validate_input`](super::validate_input).
///
/// # Arguments
///
/// * `input` - The salary parameters shared by every month
/// * `entry` - The month to calculate
/// * `config` - The pay commission tables
/// * `step_number` - The step number of the first audit step
///
/// # Errors
///
/// Returns `CalculationError` if the month's year cannot be represented or
/// an amount overflows.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::calculate_month;
/// use cpc_salary_engine::config::ConfigLoader;
/// use cpc_salary_engine::models::{Month, MonthEntry, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let mut input = SalaryInput::new("5", Decimal::from(29200));
/// input.da_percentage = Decimal::from(58);
/// let entry = MonthEntry::new(Month::February, 2024, 29);
///
/// let month = calculate_month(&input, &entry, loader.config(), 1).unwrap();
/// assert_eq!(month.result.breakdown.basic_pay, Decimal::from(29200));
/// assert_eq!(month.result.breakdown.da_on_basic, Decimal::from(16936));
/// ```
pub fn calculate_month(
    input: &SalaryInput,
    entry: &MonthEntry,
    config: &SalaryConfig,
    step_number: u32,
) -> EngineResult<MonthlySalaryResult> {
    let days_in_month =
        days_in_month(entry.month, entry.year).ok_or_else(|| EngineError::CalculationError {
            message: format!("Cannot determine days in {} {}", entry.month, entry.year),
        })?;

    let period = format!("{} {}", entry.month, entry.year);
    let mut audit = AuditSteps::new(step_number, &period);

    let days_worked = Decimal::from(entry.days_worked);
    let days_total = Decimal::from(days_in_month);
    let prorate = |amount: Decimal, what: &str| {
        amount
            .checked_mul(days_worked)
            .and_then(|worked| worked.checked_div(days_total))
            .ok_or_else(|| overflow(what))
    };

    let basic = input.effective_basic_pay()?;
    let da_percentage = input.effective_da_percentage();

    let basic_pay = prorate(basic, "basic pay")?;
    audit.push(
        "basic_pay_proration",
        "Basic Pay Proration",
        serde_json::json!({
            "basic_pay": basic.to_string(),
            "days_worked": entry.days_worked,
            "days_in_month": days_in_month
        }),
        serde_json::json!({ "basic_pay": basic_pay.to_string() }),
        format!(
            "{} x {} / {} = {}",
            basic.normalize(),
            entry.days_worked,
            days_in_month,
            basic_pay.round_dp(2)
        ),
    );

    let da_on_basic = percent_of(basic_pay, da_percentage, "DA on basic pay")?;
    audit.push(
        "dearness_allowance",
        "Dearness Allowance",
        serde_json::json!({
            "basic_pay": basic_pay.to_string(),
            "da_percentage": da_percentage.to_string()
        }),
        serde_json::json!({ "da_on_basic": da_on_basic.to_string() }),
        format!("{}% of basic pay = {}", da_percentage.normalize(), da_on_basic.round_dp(2)),
    );

    let nps_base = total(&[basic_pay, da_on_basic], "NPS base")?;
    let nps = multiply(nps_base, NPS_EMPLOYEE_RATE, "NPS")?;
    let employer_contribution = multiply(nps_base, NPS_EMPLOYER_RATE, "employer contribution")?;
    audit.push(
        "nps_contribution",
        "NPS Contribution",
        serde_json::json!({ "nps_base": nps_base.to_string() }),
        serde_json::json!({
            "nps": nps.to_string(),
            "employer_contribution": employer_contribution.to_string()
        }),
        format!(
            "Employee 10% and employer 14% of basic plus DA {}",
            nps_base.round_dp(2)
        ),
    );

    let monthly_ta = ta_amount(&input.pay_level, &input.ta_city, config);
    let ta = prorate(monthly_ta, "transport allowance")?;
    let da_on_ta = percent_of(ta, da_percentage, "DA on TA")?;
    audit.push(
        "transport_allowance",
        "Transport Allowance",
        serde_json::json!({
            "pay_level": input.pay_level.as_str(),
            "ta_city": input.ta_city,
            "higher_ta_city": config.is_higher_ta_city(&input.ta_city)
        }),
        serde_json::json!({
            "monthly_ta": monthly_ta.to_string(),
            "ta": ta.to_string(),
            "da_on_ta": da_on_ta.to_string()
        }),
        format!(
            "TA {} for level {} in {}, prorated to {}",
            monthly_ta,
            input.pay_level,
            input.ta_city,
            ta.round_dp(2)
        ),
    );

    let hpca = if input.include_hpca {
        prorate(HPCA_MONTHLY_AMOUNT, "HPCA")?
    } else {
        Decimal::ZERO
    };
    audit.push(
        "hpca",
        "Hill/Project Compensatory Allowance",
        serde_json::json!({ "included": input.include_hpca }),
        serde_json::json!({ "hpca": hpca.to_string() }),
        if input.include_hpca {
            format!("HPCA {} prorated to {}", HPCA_MONTHLY_AMOUNT, hpca.round_dp(2))
        } else {
            "HPCA not included".to_string()
        },
    );

    let sda = if input.include_sda {
        multiply(basic_pay, SDA_RATE, "SDA")?
    } else {
        Decimal::ZERO
    };
    audit.push(
        "special_duty_allowance",
        "Special Duty Allowance",
        serde_json::json!({ "included": input.include_sda }),
        serde_json::json!({ "sda": sda.to_string() }),
        if input.include_sda {
            format!("10% of basic pay = {}", sda.round_dp(2))
        } else {
            "SDA not included".to_string()
        },
    );

    let hra = if input.include_hra {
        let percentage = resolve_hra_percentage(input, config);
        let hra = percent_of(basic_pay, percentage, "HRA")?;
        audit.push(
            "house_rent_allowance",
            "House Rent Allowance",
            serde_json::json!({
                "included": true,
                "hra_city": input.hra_city,
                "explicit_percentage": input.hra_percentage.map(|p| p.to_string())
            }),
            serde_json::json!({
                "hra_percentage": percentage.to_string(),
                "hra": hra.to_string()
            }),
            format!("{}% of basic pay = {}", percentage.normalize(), hra.round_dp(2)),
        );
        hra
    } else {
        audit.push(
            "house_rent_allowance",
            "House Rent Allowance",
            serde_json::json!({ "included": false }),
            serde_json::json!({ "hra": "0" }),
            "HRA not included".to_string(),
        );
        Decimal::ZERO
    };

    let gross_salary = total(
        &[basic_pay, da_on_basic, ta, da_on_ta, hpca, sda, hra, employer_contribution],
        "gross salary",
    )?;
    let fixed = fixed_deduction(&input.pay_level);
    let total_deductions = total(&[nps, employer_contribution, fixed], "total deductions")?;
    let net_salary = gross_salary
        .checked_sub(total_deductions)
        .ok_or_else(|| overflow("net salary"))?;
    audit.push(
        "net_salary",
        "Net Salary",
        serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "fixed_deduction": fixed.to_string()
        }),
        serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "net_salary": net_salary.to_string()
        }),
        format!(
            "{} - {} = {}",
            gross_salary.round_dp(2),
            total_deductions.round_dp(2),
            net_salary.round_dp(2)
        ),
    );

    let unrounded = SalaryBreakdown {
        basic_pay,
        da_on_basic,
        ta,
        da_on_ta,
        hpca,
        sda,
        hra,
        employer_contribution,
        gross_salary,
        nps,
        fixed_deduction: fixed,
        total_deductions,
        net_salary,
    };

    Ok(MonthlySalaryResult {
        result: MonthlyResult {
            month: entry.month,
            year: entry.year,
            days_worked: entry.days_worked,
            days_in_month,
            breakdown: unrounded.rounded(),
        },
        unrounded,
        audit_steps: audit.into_steps(),
    })
}

fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} is out of range", what),
    }
}

fn multiply(amount: Decimal, factor: Decimal, what: &str) -> EngineResult<Decimal> {
    amount.checked_mul(factor).ok_or_else(|| overflow(what))
}

fn percent_of(amount: Decimal, percentage: Decimal, what: &str) -> EngineResult<Decimal> {
    Ok(multiply(amount, percentage, what)? / HUNDRED)
}

fn total(parts: &[Decimal], what: &str) -> EngineResult<Decimal> {
    parts.iter().try_fold(Decimal::ZERO, |sum, part| {
        sum.checked_add(*part).ok_or_else(|| overflow(what))
    })
}

/// An explicit HRA percentage wins over the HRA city; an input with neither
/// resolves like an unknown city.
fn resolve_hra_percentage(input: &SalaryInput, config: &SalaryConfig) -> Decimal {
    match (input.hra_percentage, &input.hra_city) {
        (Some(percentage), _) => percentage,
        (None, Some(city)) => hra_percentage(city, config),
        (None, None) => hra_percentage("", config),
    }
}

struct AuditSteps<'a> {
    next_step: u32,
    period: &'a str,
    steps: Vec<AuditStep>,
}

impl<'a> AuditSteps<'a> {
    fn new(first_step: u32, period: &'a str) -> Self {
        Self {
            next_step: first_step,
            period,
            steps: Vec::new(),
        }
    }

    fn push(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.next_step,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            period: self.period.to_string(),
            input,
            output,
            reasoning,
        });
        self.next_step += 1;
    }

    fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{CpcVersion, Month};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> SalaryConfig {
        ConfigLoader::bundled().unwrap().config().clone()
    }

    /// Level 5 at the entry cell with 58% DA, HPCA and HRA at the city default.
    fn reference_input() -> SalaryInput {
        let mut input = SalaryInput::new("5", dec("29200"));
        input.da_percentage = dec("58");
        input.include_hpca = true;
        input.include_hra = true;
        input.hra_city = Some("Other Cities".to_string());
        input
    }

    fn calculate(input: &SalaryInput, entry: MonthEntry) -> MonthlySalaryResult {
        calculate_month(input, &entry, &config(), 1).unwrap()
    }

    #[test]
    fn test_reference_scenario_february_2024() {
        let month = calculate(&reference_input(), MonthEntry::new(Month::February, 2024, 29));
        let b = &month.result.breakdown;

        assert_eq!(month.result.days_in_month, 29);
        assert_eq!(b.basic_pay, dec("29200"));
        assert_eq!(b.da_on_basic, dec("16936"));
        assert_eq!(b.ta, dec("1800"));
        assert_eq!(b.da_on_ta, dec("1044"));
        assert_eq!(b.hpca, dec("5125"));
        assert_eq!(b.sda, dec("0"));
        assert_eq!(b.hra, dec("2920"));
        assert_eq!(b.employer_contribution, dec("6459"));
        assert_eq!(b.gross_salary, dec("63484"));
        assert_eq!(b.nps, dec("4614"));
        assert_eq!(b.fixed_deduction, dec("250"));
        assert_eq!(b.total_deductions, dec("11323"));
        assert_eq!(b.net_salary, dec("52161"));
    }

    #[test]
    fn test_unrounded_values_kept() {
        let month = calculate(&reference_input(), MonthEntry::new(Month::February, 2024, 29));

        assert_eq!(month.unrounded.nps, dec("4613.6"));
        assert_eq!(month.unrounded.employer_contribution, dec("6459.04"));
        assert_eq!(month.unrounded.net_salary, dec("52161.4"));
    }

    #[test]
    fn test_partial_month_prorates_fixed_amounts() {
        let mut input = reference_input();
        input.da_percentage = Decimal::ZERO;
        let month = calculate(&input, MonthEntry::new(Month::April, 2025, 15));
        let b = &month.result.breakdown;

        // 29200 * 15 / 30, 1800 * 15 / 30, 5125 * 15 / 30
        assert_eq!(b.basic_pay, dec("14600"));
        assert_eq!(b.ta, dec("900"));
        assert_eq!(b.hpca, dec("2563"));
        assert_eq!(b.hra, dec("1460"));
    }

    #[test]
    fn test_fixed_deduction_not_prorated() {
        let month = calculate(&reference_input(), MonthEntry::new(Month::March, 2025, 10));
        assert_eq!(month.result.breakdown.fixed_deduction, dec("250"));
    }

    #[test]
    fn test_zero_days_worked_leaves_only_fixed_deduction() {
        let month = calculate(&reference_input(), MonthEntry::new(Month::January, 2025, 0));
        let b = &month.result.breakdown;

        assert_eq!(b.gross_salary, dec("0"));
        assert_eq!(b.total_deductions, dec("250"));
        assert_eq!(b.net_salary, dec("-250"));
    }

    #[test]
    fn test_sda_is_ten_percent_of_prorated_basic() {
        let mut input = reference_input();
        input.include_sda = true;
        let month = calculate(&input, MonthEntry::new(Month::February, 2024, 29));
        let b = &month.result.breakdown;

        assert_eq!(b.sda, dec("2920"));
        assert_eq!(b.gross_salary, dec("66404"));
        assert_eq!(b.net_salary, dec("55081"));
    }

    #[test]
    fn test_hra_excluded_is_zero() {
        let mut input = reference_input();
        input.include_hra = false;
        let month = calculate(&input, MonthEntry::new(Month::February, 2024, 29));
        assert_eq!(month.result.breakdown.hra, dec("0"));
    }

    #[test]
    fn test_hra_from_city_category() {
        let mut input = reference_input();
        input.hra_city = Some("Delhi".to_string());
        let month = calculate(&input, MonthEntry::new(Month::February, 2024, 29));
        assert_eq!(month.result.breakdown.hra, dec("8760"));
    }

    #[test]
    fn test_explicit_hra_percentage_overrides_city() {
        let mut input = reference_input();
        input.hra_city = Some("Delhi".to_string());
        input.hra_percentage = Some(dec("20"));
        let month = calculate(&input, MonthEntry::new(Month::February, 2024, 29));
        assert_eq!(month.result.breakdown.hra, dec("5840"));
    }

    #[test]
    fn test_higher_ta_city_doubles_ta() {
        let mut input = reference_input();
        input.ta_city = "Delhi".to_string();
        let month = calculate(&input, MonthEntry::new(Month::February, 2024, 29));
        let b = &month.result.breakdown;

        assert_eq!(b.ta, dec("3600"));
        assert_eq!(b.da_on_ta, dec("2088"));
    }

    #[test]
    fn test_eighth_cpc_applies_fitment_and_zero_da() {
        let mut input = reference_input();
        input.cpc_version = CpcVersion::Eighth;
        input.fitment_factor = Some(dec("2.57"));
        let month = calculate(&input, MonthEntry::new(Month::February, 2024, 29));
        let b = &month.result.breakdown;

        assert_eq!(b.basic_pay, dec("75044"));
        assert_eq!(b.da_on_basic, dec("0"));
        assert_eq!(b.da_on_ta, dec("0"));
        assert_eq!(b.hra, dec("7504"));
        // 10% and 14% of 75044
        assert_eq!(b.nps, dec("7504"));
        assert_eq!(b.employer_contribution, dec("10506"));
    }

    #[test]
    fn test_unrounded_net_identity_is_exact() {
        let month = calculate(&reference_input(), MonthEntry::new(Month::July, 2025, 17));
        let u = &month.unrounded;
        assert_eq!(u.net_salary, u.gross_salary - u.total_deductions);
    }

    #[test]
    fn test_audit_steps_numbered_from_start() {
        let month = calculate_month(
            &reference_input(),
            &MonthEntry::new(Month::February, 2024, 29),
            &config(),
            10,
        )
        .unwrap();

        let numbers: Vec<u32> = month.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, (10..18).collect::<Vec<u32>>());
        assert!(month.audit_steps.iter().all(|s| s.period == "February 2024"));
        assert_eq!(month.audit_steps[0].rule_id, "basic_pay_proration");
        assert_eq!(month.audit_steps[7].rule_id, "net_salary");
    }

    #[test]
    fn test_audit_records_ta_city_tier() {
        let mut input = reference_input();
        input.ta_city = "Delhi".to_string();
        let month = calculate(&input, MonthEntry::new(Month::February, 2024, 29));
        let step = month
            .audit_steps
            .iter()
            .find(|s| s.rule_id == "transport_allowance")
            .unwrap();

        assert_eq!(step.input["higher_ta_city"], true);
        assert_eq!(step.output["monthly_ta"], "3600");
    }

    #[test]
    fn test_unrepresentable_year_is_calculation_error() {
        let result = calculate_month(
            &reference_input(),
            &MonthEntry::new(Month::January, i32::MAX, 1),
            &config(),
            1,
        );

        match result {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("January"));
            }
            other => panic!("Expected CalculationError, got {:?}", other.map(|m| m.result)),
        }
    }

    #[test]
    fn test_overflowing_da_is_calculation_error() {
        let mut input = reference_input();
        input.da_percentage = Decimal::from_scientific("1e25").unwrap();

        let result = calculate_month(
            &input,
            &MonthEntry::new(Month::February, 2024, 29),
            &config(),
            1,
        );

        match result {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("DA on basic pay"));
            }
            other => panic!("Expected CalculationError, got {:?}", other.map(|m| m.result)),
        }
    }

    #[test]
    fn test_overflowing_fitment_is_calculation_error() {
        let mut input = reference_input();
        input.cpc_version = CpcVersion::Eighth;
        input.fitment_factor = Some(Decimal::from_scientific("1e25").unwrap());

        let result = calculate_month(
            &input,
            &MonthEntry::new(Month::February, 2024, 29),
            &config(),
            1,
        );

        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
