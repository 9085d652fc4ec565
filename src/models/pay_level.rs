//! Pay level and city category models.
//!
//! This module defines the [`PayLevel`] identifier used to index the pay
//! matrix and the [`CityCategory`] classification that drives HRA rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pay level identifier from the pay matrix (e.g. "5", "13A").
///
/// # Example
///
/// ```
/// use cpc_salary_engine::models::PayLevel;
///
/// assert_eq!(PayLevel::new("13A").rank(), Some(13));
/// assert_eq!(PayLevel::new("5").rank(), Some(5));
/// assert_eq!(PayLevel::new("senior").rank(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayLevel(String);

impl PayLevel {
    /// Creates a pay level from its identifier.
    pub fn new(level: impl Into<String>) -> Self {
        Self(level.into())
    }

    /// Returns the identifier as written in the pay matrix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric rank used by the rate bands.
    ///
    /// The `A` suffix of intermediate levels is dropped, so "13A" ranks as 13.
    /// Identifiers without a numeric part have no rank.
    pub fn rank(&self) -> Option<u32> {
        self.0.trim().replace('A', "").parse().ok()
    }

    /// Returns true when no level was chosen.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for PayLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PayLevel {
    fn from(level: &str) -> Self {
        Self::new(level)
    }
}

/// HRA classification of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityCategory {
    /// Metropolitan cities.
    X,
    /// Large cities.
    Y,
    /// Every other place.
    Z,
}

impl CityCategory {
    /// Returns the HRA percentage for this category: X 30, Y 20, Z 10.
    ///
    /// # Example
    ///
    /// ```
    /// use cpc_salary_engine::models::CityCategory;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(CityCategory::X.hra_percentage(), Decimal::from(30));
    /// ```
    pub fn hra_percentage(self) -> Decimal {
        match self {
            CityCategory::X => Decimal::from(30),
            CityCategory::Y => Decimal::from(20),
            CityCategory::Z => Decimal::from(10),
        }
    }
}

impl std::fmt::Display for CityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            CityCategory::X => "X",
            CityCategory::Y => "Y",
            CityCategory::Z => "Z",
        };
        f.write_str(letter)
    }
}
