//! Attendance compilation and behavioural analytics engine.
//!
//! This crate derives a canonical daily attendance status per employee from
//! leave, holiday, weekend and check-in signals, and computes behavioural
//! metrics, anomaly flags, department leave-abuse signals and absenteeism
//! risk from the resulting history.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod attendance;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
