//! Configuration loading and management for the Attendance Engine.
//!
//! Analytics thresholds (window lengths, score deductions, risk bands,
//! anomaly and leave-abuse cut-offs, weekend days) are policy rather than
//! behaviour, so they live in a YAML file instead of in code.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/analytics.yaml").unwrap();
//! println!("Late after {}:00", config.config().scoring.late_after_hour);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AbsenteeismConfig, AnalyticsConfig, AnomalyConfig, CalendarConfig, LeaveAbuseConfig,
    PerformerConfig, ScoringConfig, WindowConfig,
};
