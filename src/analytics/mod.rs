//! Behavioural analytics over attendance history.
//!
//! This module contains the metrics engine, work-duration anomaly
//! detection, department leave-abuse detection, absenteeism risk
//! prediction and performer ranking. All functions here are pure: they take
//! already-loaded data and never touch the store.

mod anomaly;
mod leave_abuse;
mod metrics;
mod risk;

pub use anomaly::{DurationStats, detect_attendance_anomalies};
pub use leave_abuse::detect_department_leave_abuse;
pub use metrics::{attendance_score, classify_attendance_score, compute_behavior_metrics};
pub use risk::{classify_absenteeism_risk, rank_performers};
