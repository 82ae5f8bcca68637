//! Attendance derivation for the Attendance Engine.
//!
//! This module contains daily status resolution, the idempotent daily
//! compiler built on it, and extraction of the trailing attendance window
//! the analytics read.

mod compiler;
mod history;
mod status_resolver;

pub use compiler::compile_daily_attendance;
pub use history::{AttendanceRow, AttendanceWindow, extract_history};
pub use status_resolver::{ResolvedStatus, resolve_daily_status};

pub(crate) use history::{ensure_known_employee, window_start};
