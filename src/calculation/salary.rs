//! Salary calculation entry point.
//!
//! This module validates an input, calculates each month, and aggregates
//! the rounded monthly breakdowns into the totals.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::SalaryConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, MonthlyResult, SalaryBreakdown, SalaryInput, SalaryResults, round_currency,
};

use super::monthly_salary::calculate_month;
use super::validation::validate_input;

/// Calculates the salary breakdown for every month of an input.
///
/// Months are calculated in input order. The totals are the field-wise sum
/// of the already rounded monthly breakdowns, so rounding differences add up
/// across months rather than being rounded away.
///
/// # Errors
///
/// Returns `InvalidInput` with every failing field if validation fails;
/// nothing is calculated in that case.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::calculate_salary;
/// use cpc_salary_engine::config::ConfigLoader;
/// use cpc_salary_engine::models::{Month, MonthEntry, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let mut input = SalaryInput::new("5", Decimal::from(29200));
/// input.months.push(MonthEntry::new(Month::January, 2025, 31));
/// input.months.push(MonthEntry::new(Month::February, 2025, 28));
///
/// let results = calculate_salary(&input, loader.config()).unwrap();
/// assert_eq!(results.monthly_results.len(), 2);
/// assert_eq!(results.totals.basic_pay, Decimal::from(58400));
/// ```
pub fn calculate_salary(input: &SalaryInput, config: &SalaryConfig) -> EngineResult<SalaryResults> {
    let start_time = Instant::now();

    validate_input(input, config)?;

    let mut monthly_results = Vec::with_capacity(input.months.len());
    let mut steps = Vec::new();
    let mut step_number: u32 = 1;

    for entry in &input.months {
        let month = calculate_month(input, entry, config, step_number)?;
        step_number += month.audit_steps.len() as u32;
        steps.extend(month.audit_steps);
        monthly_results.push(month.result);
    }

    let totals = aggregate(&monthly_results);

    debug!(
        months = monthly_results.len(),
        net_salary = %totals.net_salary,
        "Salary calculated"
    );

    Ok(SalaryResults {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        cpc_version: input.cpc_version,
        effective_basic_pay: round_currency(input.effective_basic_pay()?),
        monthly_results,
        totals,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Sums the rounded breakdowns of several months field by field.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::aggregate;
///
/// let totals = aggregate(&[]);
/// assert!(totals.net_salary.is_zero());
/// ```
pub fn aggregate(results: &[MonthlyResult]) -> SalaryBreakdown {
    results.iter().map(|r| &r.breakdown).sum()
}
