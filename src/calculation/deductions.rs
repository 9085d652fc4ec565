//! Deduction rates.
//!
//! This module provides the fixed deduction step function and the NPS
//! contribution rates applied to basic pay plus DA.

use rust_decimal::Decimal;

use crate::models::PayLevel;

/// Employee NPS contribution as a fraction of basic plus DA (10%).
pub const NPS_EMPLOYEE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Employer NPS contribution as a fraction of basic plus DA (14%).
pub const NPS_EMPLOYER_RATE: Decimal = Decimal::from_parts(14, 0, 0, false, 2);

/// Returns the fixed monthly deduction for a pay level.
///
/// Levels up to 5 pay 250, level 6 pays 450, levels 7 to 11 pay 650 and
/// levels 12 and above pay 1000. A level without a numeric rank pays 250.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::fixed_deduction;
/// use cpc_salary_engine::models::PayLevel;
/// use rust_decimal::Decimal;
///
/// assert_eq!(fixed_deduction(&PayLevel::new("5")), Decimal::from(250));
/// assert_eq!(fixed_deduction(&PayLevel::new("12")), Decimal::from(1000));
/// ```
pub fn fixed_deduction(pay_level: &PayLevel) -> Decimal {
    let amount = match pay_level.rank() {
        Some(0..=5) | None => 250,
        Some(6) => 450,
        Some(7..=11) => 650,
        Some(_) => 1000,
    };
    Decimal::from(amount)
}
