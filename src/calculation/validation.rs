//! Salary input validation.
//!
//! Validation runs before any calculation and reports every failing field,
//! so a caller can show all problems at once. No amounts are computed for an
//! input that fails validation.

use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::error::{EngineError, EngineResult, FieldError};
use crate::models::{CpcVersion, SalaryInput};

use super::calendar::days_in_month;

/// Highest accepted DA percentage.
pub const MAX_DA_PERCENTAGE: Decimal = Decimal::ONE_THOUSAND;

/// Highest accepted HRA percentage.
pub const MAX_HRA_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Highest accepted fitment factor.
pub const MAX_FITMENT_FACTOR: Decimal = Decimal::TEN;

/// Calendar years accepted for a month entry.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Checks a salary input against the pay matrix and calendar.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] listing every field that failed:
/// - `pay_level`: missing, or not part of the pay matrix
/// - `basic_pay`: not positive, or not a cell of the chosen level
/// - `da_percentage`: negative, or above [`MAX_DA_PERCENTAGE`]
/// - `fitment_factor`: not positive, or above [`MAX_FITMENT_FACTOR`], under
///   the 8th CPC
/// - `hra_percentage`: negative, above [`MAX_HRA_PERCENTAGE`], or absent
///   together with the HRA city while HRA is included
/// - `months`: empty
/// - `months[i].year`: outside [`YEAR_RANGE`]
/// - `months[i].days_worked`: negative, or more than the month has
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::validate_input;
/// use cpc_salary_engine::config::ConfigLoader;
/// use cpc_salary_engine::models::{Month, MonthEntry, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let mut input = SalaryInput::new("5", Decimal::from(29200));
/// input.months.push(MonthEntry::new(Month::February, 2024, 29));
/// assert!(validate_input(&input, loader.config()).is_ok());
///
/// input.months.push(MonthEntry::new(Month::February, 2025, 29));
/// assert!(validate_input(&input, loader.config()).is_err());
/// ```
pub fn validate_input(input: &SalaryInput, config: &SalaryConfig) -> EngineResult<()> {
    let mut errors = Vec::new();

    validate_pay(input, config, &mut errors);

    if input.da_percentage < Decimal::ZERO {
        errors.push(FieldError::new(
            "da_percentage",
            "DA percentage cannot be negative",
        ));
    } else if input.da_percentage > MAX_DA_PERCENTAGE {
        errors.push(FieldError::new(
            "da_percentage",
            format!("DA percentage cannot exceed {}", MAX_DA_PERCENTAGE),
        ));
    }

    if input.cpc_version == CpcVersion::Eighth {
        if let Some(factor) = input.fitment_factor {
            if factor <= Decimal::ZERO {
                errors.push(FieldError::new(
                    "fitment_factor",
                    "Fitment factor must be a positive number",
                ));
            } else if factor > MAX_FITMENT_FACTOR {
                errors.push(FieldError::new(
                    "fitment_factor",
                    format!("Fitment factor cannot exceed {}", MAX_FITMENT_FACTOR),
                ));
            }
        }
    }

    validate_hra(input, &mut errors);
    validate_months(input, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput { errors })
    }
}

fn validate_pay(input: &SalaryInput, config: &SalaryConfig, errors: &mut Vec<FieldError>) {
    if input.basic_pay <= Decimal::ZERO {
        errors.push(FieldError::new(
            "basic_pay",
            "Basic pay must be a positive number",
        ));
    }

    if input.pay_level.is_empty() {
        errors.push(FieldError::new("pay_level", "Pay level is required"));
        return;
    }

    match config.level_cells(input.pay_level.as_str()) {
        None => errors.push(FieldError::new(
            "pay_level",
            format!("Unknown pay level '{}'", input.pay_level),
        )),
        Some(level) => {
            if input.basic_pay > Decimal::ZERO && !level.cells.contains(&input.basic_pay) {
                errors.push(FieldError::new(
                    "basic_pay",
                    format!(
                        "Basic pay {} is not a cell of pay level {}",
                        input.basic_pay, input.pay_level
                    ),
                ));
            }
        }
    }
}

fn validate_hra(input: &SalaryInput, errors: &mut Vec<FieldError>) {
    if let Some(percentage) = input.hra_percentage {
        if percentage < Decimal::ZERO {
            errors.push(FieldError::new(
                "hra_percentage",
                "HRA percentage cannot be negative",
            ));
        } else if percentage > MAX_HRA_PERCENTAGE {
            errors.push(FieldError::new(
                "hra_percentage",
                format!("HRA percentage cannot exceed {}", MAX_HRA_PERCENTAGE),
            ));
        }
    }

    if input.include_hra && input.hra_percentage.is_none() && input.hra_city.is_none() {
        errors.push(FieldError::new(
            "hra_percentage",
            "You need to select an HRA option when HRA is included.",
        ));
    }
}

fn validate_months(input: &SalaryInput, errors: &mut Vec<FieldError>) {
    if input.months.is_empty() {
        errors.push(FieldError::new("months", "At least one month is required."));
        return;
    }

    for (index, entry) in input.months.iter().enumerate() {
        if entry.days_worked < 0 {
            errors.push(FieldError::new(
                format!("months[{}].days_worked", index),
                "Days worked cannot be negative",
            ));
        }

        let days = if YEAR_RANGE.contains(&entry.year) {
            days_in_month(entry.month, entry.year)
        } else {
            None
        };

        match days {
            None => errors.push(FieldError::new(
                format!("months[{}].year", index),
                format!("Year {} is out of range", entry.year),
            )),
            Some(days) => {
                if i64::from(entry.days_worked) > i64::from(days) {
                    errors.push(FieldError::new(
                        format!("months[{}].days_worked", index),
                        "Days worked cannot exceed days in the selected month",
                    ));
                }
            }
        }
    }
}
