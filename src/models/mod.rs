//! Core data models for the CPC Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_level;
mod salary_input;
mod salary_result;

pub use pay_level::{CityCategory, PayLevel};
pub use salary_input::{
    CpcVersion, DEFAULT_FITMENT_FACTOR, DEFAULT_TA_CITY, Month, MonthEntry, SalaryInput,
};
pub use salary_result::{
    AuditStep, AuditTrace, MonthlyResult, SalaryBreakdown, SalaryResults, round_currency,
};
