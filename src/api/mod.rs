//! HTTP API module for the pay breakdown engine.
//!
//! Exposes `POST /calculate`, which breaks down a month of shifts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
