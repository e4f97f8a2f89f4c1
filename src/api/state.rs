//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds only immutable data; the calculation itself needs no shared state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// When the state was created.
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns when the state was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
