//! Configuration loading for the payroll service.
//!
//! Only service concerns (listener address, log filter) are configurable. The
//! statutory rates and the ISR scale are fixed in [`crate::calculation`].
//!
//! # Example
//!
//! ```no_run
//! use nomina_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/nomina.yaml").unwrap();
//! println!("Binding to {}", loader.config().bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader};
pub use types::{EngineConfig, LoggingSettings, ServerSettings};
