//! Application state for the Attendance Engine API.

use std::sync::Arc;

use crate::engine::AttendanceEngine;

/// Shared application state.
///
/// Holds the engine every handler delegates to.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<AttendanceEngine>,
}

impl AppState {
    /// Creates a new application state around `engine`.
    pub fn new(engine: AttendanceEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }
}
