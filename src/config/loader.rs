//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay commission
//! tables from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CitiesConfig, CommissionMetadata, HraCity, PayMatrixConfig, SalaryConfig,
};

/// The HRA city entry that stands for every unlisted place.
pub const DEFAULT_HRA_CITY: &str = "Other Cities";

const BUNDLED_COMMISSION: &str = include_str!("../../config/7th_cpc/commission.yaml");
const BUNDLED_PAY_MATRIX: &str = include_str!("../../config/7th_cpc/pay_matrix.yaml");
const BUNDLED_CITIES: &str = include_str!("../../config/7th_cpc/cities.yaml");

/// Loads and provides access to pay commission configuration.
///
/// # Directory Structure
///
/// ```text
/// config/7th_cpc/
/// ├── commission.yaml   # Commission metadata
/// ├── pay_matrix.yaml   # Basic pay cells per pay level
/// └── cities.yaml       # HRA categories and higher TA cities
/// ```
///
/// # Example
///
/// ```
/// use cpc_salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let cells = loader.basic_pay_cells("5").unwrap();
/// assert_eq!(cells[0].to_string(), "29200");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SalaryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// holds a pay level whose cells are empty or not strictly ascending.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cpc_salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/7th_cpc")?;
    /// # Ok::<(), cpc_salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CommissionMetadata>(&path.join("commission.yaml"))?;
        let pay_matrix_path = path.join("pay_matrix.yaml");
        let pay_matrix = Self::load_yaml::<PayMatrixConfig>(&pay_matrix_path)?;
        Self::check_pay_matrix(&pay_matrix, &pay_matrix_path.display().to_string())?;
        let cities = Self::load_yaml::<CitiesConfig>(&path.join("cities.yaml"))?;

        Ok(Self {
            config: SalaryConfig::new(metadata, pay_matrix, cities),
        })
    }

    /// Returns the 7th CPC tables compiled into the crate.
    pub fn bundled() -> EngineResult<Self> {
        let metadata =
            Self::parse_yaml::<CommissionMetadata>(BUNDLED_COMMISSION, "<bundled>/commission.yaml")?;
        let pay_matrix =
            Self::parse_yaml::<PayMatrixConfig>(BUNDLED_PAY_MATRIX, "<bundled>/pay_matrix.yaml")?;
        Self::check_pay_matrix(&pay_matrix, "<bundled>/pay_matrix.yaml")?;
        let cities = Self::parse_yaml::<CitiesConfig>(BUNDLED_CITIES, "<bundled>/cities.yaml")?;

        Ok(Self {
            config: SalaryConfig::new(metadata, pay_matrix, cities),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn check_pay_matrix(matrix: &PayMatrixConfig, path: &str) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.to_string(),
            message,
        };

        if matrix.levels.is_empty() {
            return Err(parse_error("pay matrix has no levels".to_string()));
        }

        for level in &matrix.levels {
            if level.cells.is_empty() {
                return Err(parse_error(format!("pay level '{}' has no cells", level.level)));
            }
            if level.cells.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(parse_error(format!(
                    "pay level '{}' cells are not strictly ascending",
                    level.level
                )));
            }
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SalaryConfig {
        &self.config
    }

    /// Returns the commission metadata.
    pub fn commission(&self) -> &CommissionMetadata {
        self.config.commission()
    }

    /// Returns the pay level identifiers in matrix order.
    pub fn pay_levels(&self) -> Vec<&str> {
        self.config
            .pay_matrix()
            .iter()
            .map(|l| l.level.as_str())
            .collect()
    }

    /// Gets the admissible basic pays of a pay level.
    ///
    /// Returns `PayLevelNotFound` if the level is not part of the matrix.
    pub fn basic_pay_cells(&self, level: &str) -> EngineResult<&[Decimal]> {
        self.config
            .level_cells(level)
            .map(|l| l.cells.as_slice())
            .ok_or_else(|| EngineError::PayLevelNotFound {
                level: level.to_string(),
            })
    }

    /// Returns the HRA cities sorted by name, with the catch-all entry last.
    pub fn hra_city_options(&self) -> Vec<&HraCity> {
        let mut cities: Vec<&HraCity> = self
            .config
            .hra_cities()
            .iter()
            .filter(|c| c.name != DEFAULT_HRA_CITY)
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        cities.extend(
            self.config
                .hra_cities()
                .iter()
                .filter(|c| c.name == DEFAULT_HRA_CITY),
        );
        cities
    }

    /// Returns every transport allowance city choice, sorted.
    ///
    /// The list holds the higher TA cities plus the standard-rate catch-all.
    pub fn ta_city_options(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.config.higher_ta_cities().to_vec();
        cities.push(crate::models::DEFAULT_TA_CITY.to_string());
        cities.sort();
        cities
    }
}
