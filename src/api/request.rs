//! Request types for the CPC Salary Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoints. The same body is accepted by the CLI `calculate` command.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CpcVersion, DEFAULT_FITMENT_FACTOR, DEFAULT_TA_CITY, Month, MonthEntry, PayLevel, SalaryInput,
};

/// Request body for the `/calculate` and `/calculate/report` endpoints.
///
/// Mirrors the salary form: flags default to off, the TA city defaults to
/// "Other Places" and the CPC mode defaults to the 7th CPC. Under the 8th
/// CPC a missing fitment factor becomes [`DEFAULT_FITMENT_FACTOR`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The pay commission mode.
    #[serde(default)]
    pub cpc_version: CpcVersion,
    /// The pay level (e.g., "5" or "13A").
    pub pay_level: String,
    /// The basic pay, one of the level's cells.
    pub basic_pay: Decimal,
    /// Dearness allowance percentage.
    #[serde(default)]
    pub da_percentage: Decimal,
    /// Fitment factor for the 8th CPC mode.
    #[serde(default)]
    pub fitment_factor: Option<Decimal>,
    /// Whether HPCA is paid.
    #[serde(default)]
    pub include_hpca: bool,
    /// Whether SDA is paid.
    #[serde(default)]
    pub include_sda: bool,
    /// Whether HRA is paid.
    #[serde(default)]
    pub include_hra: bool,
    /// The TA city.
    #[serde(default = "default_ta_city")]
    pub ta_city: String,
    /// The HRA city.
    #[serde(default)]
    pub hra_city: Option<String>,
    /// Explicit HRA percentage.
    #[serde(default)]
    pub hra_percentage: Option<Decimal>,
    /// The months to calculate.
    pub months: Vec<MonthEntryRequest>,
}

fn default_ta_city() -> String {
    DEFAULT_TA_CITY.to_string()
}

/// One month in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthEntryRequest {
    /// The month, by English name.
    pub month: Month,
    /// The calendar year.
    pub year: i32,
    /// Days worked in the month.
    pub days_worked: i32,
}

impl From<MonthEntryRequest> for MonthEntry {
    fn from(req: MonthEntryRequest) -> Self {
        MonthEntry {
            month: req.month,
            year: req.year,
            days_worked: req.days_worked,
        }
    }
}

impl From<SalaryRequest> for SalaryInput {
    fn from(req: SalaryRequest) -> Self {
        SalaryInput {
            cpc_version: req.cpc_version,
            pay_level: PayLevel::new(req.pay_level),
            basic_pay: req.basic_pay,
            da_percentage: req.da_percentage,
            fitment_factor: match req.cpc_version {
                CpcVersion::Eighth => req.fitment_factor.or(Some(DEFAULT_FITMENT_FACTOR)),
                CpcVersion::Seventh => req.fitment_factor,
            },
            include_hpca: req.include_hpca,
            include_sda: req.include_sda,
            include_hra: req.include_hra,
            ta_city: req.ta_city,
            hra_city: req.hra_city,
            hra_percentage: req.hra_percentage,
            months: req.months.into_iter().map(Into::into).collect(),
        }
    }
}
