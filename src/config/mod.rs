//! Configuration loading and management for the CPC Salary Engine.
//!
//! This module loads pay commission tables from YAML files: commission
//! metadata, the pay matrix, HRA city categories and higher TA cities.
//!
//! # Example
//!
//! ```
//! use cpc_salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::bundled().unwrap();
//! println!("Loaded commission: {}", config.commission().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_HRA_CITY};
pub use types::{
    CitiesConfig, CommissionMetadata, HraCity, PayLevelCells, PayMatrixConfig, SalaryConfig,
};
