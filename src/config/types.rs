//! Configuration types for pay commission tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CityCategory;

/// Metadata about the pay commission.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionMetadata {
    /// Short code of the commission (e.g., "7th_cpc").
    pub code: String,
    /// The human-readable name of the commission.
    pub name: String,
    /// The date the pay matrix took effect.
    pub effective_from: NaiveDate,
}

/// The admissible basic pay cells of one pay level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayLevelCells {
    /// The pay level identifier (e.g., "13A").
    pub level: String,
    /// Basic pay cells in ascending order.
    pub cells: Vec<Decimal>,
}

/// Pay matrix configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayMatrixConfig {
    /// Pay levels in matrix order.
    pub levels: Vec<PayLevelCells>,
}

/// A city with its HRA classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HraCity {
    /// The city name.
    pub name: String,
    /// The HRA category of the city.
    pub category: CityCategory,
}

/// City tables configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CitiesConfig {
    /// Cities with an HRA classification.
    pub hra_cities: Vec<HraCity>,
    /// Cities drawing transport allowance at the higher rate.
    pub higher_ta_cities: Vec<String>,
}

/// The complete pay commission configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SalaryConfig {
    /// Commission metadata.
    metadata: CommissionMetadata,
    /// Pay levels in matrix order.
    pay_matrix: Vec<PayLevelCells>,
    /// HRA city classification.
    hra_cities: Vec<HraCity>,
    /// Higher transport allowance cities.
    higher_ta_cities: Vec<String>,
}

impl SalaryConfig {
    /// Creates a new SalaryConfig from its component parts.
    pub fn new(
        metadata: CommissionMetadata,
        pay_matrix: PayMatrixConfig,
        cities: CitiesConfig,
    ) -> Self {
        Self {
            metadata,
            pay_matrix: pay_matrix.levels,
            hra_cities: cities.hra_cities,
            higher_ta_cities: cities.higher_ta_cities,
        }
    }

    /// Returns the commission metadata.
    pub fn commission(&self) -> &CommissionMetadata {
        &self.metadata
    }

    /// Returns the pay matrix in level order.
    pub fn pay_matrix(&self) -> &[PayLevelCells] {
        &self.pay_matrix
    }

    /// Returns the HRA city classification.
    pub fn hra_cities(&self) -> &[HraCity] {
        &self.hra_cities
    }

    /// Returns the higher transport allowance cities.
    pub fn higher_ta_cities(&self) -> &[String] {
        &self.higher_ta_cities
    }

    /// Returns the cells of a pay level, if it is part of the matrix.
    pub fn level_cells(&self, level: &str) -> Option<&PayLevelCells> {
        self.pay_matrix.iter().find(|l| l.level == level)
    }

    /// Returns the HRA category of a city. Cities not in the table are `Z`.
    pub fn city_category(&self, city: &str) -> CityCategory {
        self.hra_cities
            .iter()
            .find(|c| c.name == city)
            .map(|c| c.category)
            .unwrap_or(CityCategory::Z)
    }

    /// Returns true if the city draws transport allowance at the higher rate.
    pub fn is_higher_ta_city(&self, city: &str) -> bool {
        self.higher_ta_cities.iter().any(|c| c == city)
    }
}
