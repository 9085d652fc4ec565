//! Allowance rate resolution.
//!
//! This module resolves the transport allowance for a pay level and city,
//! the HRA percentage for a city, and holds the fixed HPCA and SDA rates.
//! Every resolver is total: unknown cities and levels fall back to the
//! lowest tier.

use rust_decimal::Decimal;

use crate::config::SalaryConfig;
use crate::models::PayLevel;

/// Monthly HPCA amount for a full month worked.
pub const HPCA_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(5125, 0, 0, false, 0);

/// SDA as a fraction of prorated basic pay (10%).
pub const SDA_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Returns the monthly transport allowance for a pay level and TA city.
///
/// | Level rank | Higher TA city | Other places |
/// |------------|----------------|--------------|
/// | 9 and up   | 7200           | 3600         |
/// | 3 to 8     | 3600           | 1800         |
/// | below 3    | 1350           | 900          |
///
/// A level without a numeric rank falls in the lowest band.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::ta_amount;
/// use cpc_salary_engine::config::ConfigLoader;
/// use cpc_salary_engine::models::PayLevel;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// assert_eq!(ta_amount(&PayLevel::new("10"), "Delhi", loader.config()), Decimal::from(7200));
/// assert_eq!(ta_amount(&PayLevel::new("2"), "Other Places", loader.config()), Decimal::from(900));
/// ```
pub fn ta_amount(pay_level: &PayLevel, ta_city: &str, config: &SalaryConfig) -> Decimal {
    let rank = pay_level.rank().unwrap_or(0);
    let amount = if config.is_higher_ta_city(ta_city) {
        match rank {
            9.. => 7200,
            3..=8 => 3600,
            _ => 1350,
        }
    } else {
        match rank {
            9.. => 3600,
            3..=8 => 1800,
            _ => 900,
        }
    };
    Decimal::from(amount)
}

/// Returns the HRA percentage for a city: X 30, Y 20, anything else 10.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::hra_percentage;
/// use cpc_salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// assert_eq!(hra_percentage("Mumbai", loader.config()), Decimal::from(30));
/// assert_eq!(hra_percentage("Shimla", loader.config()), Decimal::from(10));
/// ```
pub fn hra_percentage(city: &str, config: &SalaryConfig) -> Decimal {
    config.city_category(city).hra_percentage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn config() -> SalaryConfig {
        ConfigLoader::bundled().unwrap().config().clone()
    }

    fn ta(level: &str, city: &str) -> Decimal {
        ta_amount(&PayLevel::new(level), city, &config())
    }

    #[test]
    fn test_ta_higher_city_bands() {
        assert_eq!(ta("10", "Delhi"), Decimal::from(7200));
        assert_eq!(ta("9", "Pune"), Decimal::from(7200));
        assert_eq!(ta("8", "Pune"), Decimal::from(3600));
        assert_eq!(ta("3", "Kochi"), Decimal::from(3600));
        assert_eq!(ta("2", "Kochi"), Decimal::from(1350));
        assert_eq!(ta("1", "Surat"), Decimal::from(1350));
    }

    #[test]
    fn test_ta_standard_city_bands() {
        assert_eq!(ta("14", "Other Places"), Decimal::from(3600));
        assert_eq!(ta("9", "Other Places"), Decimal::from(3600));
        assert_eq!(ta("5", "Other Places"), Decimal::from(1800));
        assert_eq!(ta("3", "Other Places"), Decimal::from(1800));
        assert_eq!(ta("2", "Other Places"), Decimal::from(900));
    }

    #[test]
    fn test_ta_intermediate_level_uses_base_rank() {
        assert_eq!(ta("13A", "Chennai"), Decimal::from(7200));
    }

    #[test]
    fn test_ta_unknown_city_is_standard_rate() {
        assert_eq!(ta("10", "Shimla"), Decimal::from(3600));
    }

    #[test]
    fn test_ta_unranked_level_is_lowest_band() {
        assert_eq!(ta("", "Delhi"), Decimal::from(1350));
        assert_eq!(ta("n/a", "Other Places"), Decimal::from(900));
    }

    #[test]
    fn test_hra_percentage_by_category() {
        let config = config();
        assert_eq!(hra_percentage("Delhi", &config), Decimal::from(30));
        assert_eq!(hra_percentage("Lucknow", &config), Decimal::from(20));
        assert_eq!(hra_percentage("Other Cities", &config), Decimal::from(10));
    }

    #[test]
    fn test_hra_percentage_unknown_city_defaults_to_z() {
        assert_eq!(hra_percentage("Atlantis", &config()), Decimal::from(10));
        assert_eq!(hra_percentage("", &config()), Decimal::from(10));
    }

    #[test]
    fn test_fixed_rates() {
        assert_eq!(HPCA_MONTHLY_AMOUNT, Decimal::from(5125));
        assert_eq!(SDA_RATE.to_string(), "0.10");
    }
}
