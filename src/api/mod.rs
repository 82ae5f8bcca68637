//! HTTP API module for the Attendance Engine.
//!
//! This module exposes compilation and the analytics reports as JSON
//! endpoints for the presentation layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CompileRequest, EmployeeQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
