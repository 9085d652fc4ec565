//! Calculation logic for the CPC Salary Engine.
//!
//! This module contains the rate resolvers (fixed deduction, transport
//! allowance, HRA percentage), calendar helpers, input validation, the
//! monthly salary calculation and the multi-month entry point with its
//! aggregation.

mod allowances;
mod calendar;
mod deductions;
mod monthly_salary;
mod salary;
mod validation;

pub use allowances::{HPCA_MONTHLY_AMOUNT, SDA_RATE, hra_percentage, ta_amount};
pub use calendar::days_in_month;
pub use deductions::{NPS_EMPLOYEE_RATE, NPS_EMPLOYER_RATE, fixed_deduction};
pub use monthly_salary::{MonthlySalaryResult, calculate_month};
pub use salary::{aggregate, calculate_salary};
pub use validation::{
    MAX_DA_PERCENTAGE, MAX_FITMENT_FACTOR, MAX_HRA_PERCENTAGE, YEAR_RANGE, validate_input,
};
