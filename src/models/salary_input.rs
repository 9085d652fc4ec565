//! Salary input models.
//!
//! This module contains the [`SalaryInput`] record handed to the calculation
//! engine, together with the [`MonthEntry`] rows it is computed over.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayLevel;
use crate::error::{EngineError, EngineResult};

/// The transport allowance city used when none is given.
pub const DEFAULT_TA_CITY: &str = "Other Places";

/// The fitment factor proposed for projecting 7th CPC basic pay.
pub const DEFAULT_FITMENT_FACTOR: Decimal = Decimal::from_parts(257, 0, 0, false, 2);

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the month number, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the English name of the month.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One month of the calculation.
///
/// `days_worked` is signed so that negative values reach validation instead
/// of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    /// The calendar month.
    pub month: Month,
    /// The calendar year.
    pub year: i32,
    /// Days worked in the month, between 0 and the number of days in it.
    pub days_worked: i32,
}

impl MonthEntry {
    /// Creates a month entry.
    pub fn new(month: Month, year: i32, days_worked: i32) -> Self {
        Self {
            month,
            year,
            days_worked,
        }
    }
}

/// The pay commission a calculation is made under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpcVersion {
    /// The 7th CPC as currently in force.
    #[default]
    Seventh,
    /// An assumed 8th CPC: basic pay scaled by the fitment factor, DA reset to 0.
    Eighth,
}

impl CpcVersion {
    /// Returns the calculator heading for this commission.
    pub fn title(self) -> &'static str {
        match self {
            CpcVersion::Seventh => "7th CPC Salary Calculator",
            CpcVersion::Eighth => "Assumed 8th CPC Salary Calculator",
        }
    }
}

/// Everything needed to calculate a salary breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// The pay commission mode.
    pub cpc_version: CpcVersion,
    /// The pay level from the pay matrix.
    pub pay_level: PayLevel,
    /// The (7th CPC) basic pay, one of the level's cells.
    pub basic_pay: Decimal,
    /// Dearness allowance as a percentage of basic pay.
    pub da_percentage: Decimal,
    /// Multiplier applied to basic pay in the 8th CPC mode.
    pub fitment_factor: Option<Decimal>,
    /// Whether HPCA is paid.
    pub include_hpca: bool,
    /// Whether SDA is paid.
    pub include_sda: bool,
    /// Whether HRA is paid.
    pub include_hra: bool,
    /// City deciding the transport allowance tier.
    pub ta_city: String,
    /// City deciding the HRA percentage when none is given explicitly.
    pub hra_city: Option<String>,
    /// Explicit HRA percentage, taking precedence over the HRA city.
    pub hra_percentage: Option<Decimal>,
    /// The months to calculate, in order.
    pub months: Vec<MonthEntry>,
}

impl SalaryInput {
    /// Returns the basic pay the calculation runs on.
    ///
    /// Under the 8th CPC mode a supplied fitment factor scales the basic pay;
    /// otherwise the basic pay is used as entered.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the scaled basic pay overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use cpc_salary_engine::models::{CpcVersion, SalaryInput, DEFAULT_FITMENT_FACTOR};
    /// use rust_decimal::Decimal;
    ///
    /// let mut input = SalaryInput::new("5", Decimal::from(29200));
    /// assert_eq!(input.effective_basic_pay().unwrap(), Decimal::from(29200));
    ///
    /// input.cpc_version = CpcVersion::Eighth;
    /// input.fitment_factor = Some(DEFAULT_FITMENT_FACTOR);
    /// assert_eq!(input.effective_basic_pay().unwrap(), Decimal::from(75044));
    /// ```
    pub fn effective_basic_pay(&self) -> EngineResult<Decimal> {
        match (self.cpc_version, self.fitment_factor) {
            (CpcVersion::Eighth, Some(factor)) if factor > Decimal::ZERO => self
                .basic_pay
                .checked_mul(factor)
                .ok_or_else(|| EngineError::CalculationError {
                    message: format!(
                        "Basic pay {} scaled by fitment factor {} overflows",
                        self.basic_pay, factor
                    ),
                }),
            _ => Ok(self.basic_pay),
        }
    }

    /// Returns the DA percentage the calculation runs on (0 under the 8th CPC).
    pub fn effective_da_percentage(&self) -> Decimal {
        match self.cpc_version {
            CpcVersion::Seventh => self.da_percentage,
            CpcVersion::Eighth => Decimal::ZERO,
        }
    }

    /// Creates a 7th CPC input for a level and basic pay with no allowances,
    /// no DA and no months.
    pub fn new(pay_level: impl Into<String>, basic_pay: Decimal) -> Self {
        Self {
            cpc_version: CpcVersion::Seventh,
            pay_level: PayLevel::new(pay_level),
            basic_pay,
            da_percentage: Decimal::ZERO,
            fitment_factor: None,
            include_hpca: false,
            include_sda: false,
            include_hra: false,
            ta_city: DEFAULT_TA_CITY.to_string(),
            hra_city: None,
            hra_percentage: None,
            months: Vec::new(),
        }
    }
}
