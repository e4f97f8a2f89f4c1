//! Net salary engine for Dominican Republic payroll.
//!
//! This crate computes monthly take-home pay from a gross salary and other
//! deductions, applying the social security (TSS) withholding, the DGII
//! progressive income tax (ISR) scale, and an estimated monthly bonus.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

/// Version reported in calculation reports and health checks.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
