//! Application state for the CPC Salary Engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded pay tables, shared read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    tables: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state around loaded pay tables.
    pub fn new(tables: ConfigLoader) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns the loaded pay tables.
    pub fn tables(&self) -> &ConfigLoader {
        &self.tables
    }
}
