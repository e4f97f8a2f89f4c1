//! HTTP API module for the payroll engine.
//!
//! This module exposes the calculator to a presentation layer over JSON:
//! `POST /calculate`, `GET /rates`, and `GET /health`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RawAmount};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, RatesResponse};
pub use state::AppState;
