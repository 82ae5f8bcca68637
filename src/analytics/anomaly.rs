//! Work-duration anomaly detection.
//!
//! Flags days whose hours worked sit more than `z_threshold` population
//! standard deviations from the window mean.

use rust_decimal::prelude::ToPrimitive;

use crate::attendance::AttendanceWindow;
use crate::config::AnomalyConfig;
use crate::models::AnomalyRecord;

/// Population mean and standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl DurationStats {
    /// Computes stats over `values`; `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Standard score of `value`.
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }
}

/// Detects unusual work durations in `window`.
///
/// Returns nothing when the window has fewer than `min_rows` rows or when
/// every duration is identical.
pub fn detect_attendance_anomalies(
    window: &AttendanceWindow,
    config: &AnomalyConfig,
) -> Vec<AnomalyRecord> {
    if window.is_empty() || window.len() < config.min_rows {
        return Vec::new();
    }

    let durations: Vec<f64> = window
        .rows()
        .iter()
        .map(|r| r.duration.to_f64().unwrap_or(0.0))
        .collect();

    let Some(stats) = DurationStats::from_values(&durations) else {
        return Vec::new();
    };
    if stats.std_dev <= 0.0 {
        return Vec::new();
    }

    window
        .rows()
        .iter()
        .zip(&durations)
        .filter(|(_, duration)| stats.z_score(**duration).abs() > config.z_threshold)
        .map(|(row, duration)| AnomalyRecord {
            employee_id: row.employee_id.clone(),
            date: row.date.to_string(),
            reason: format!("Unusual work duration ({:.2}h)", duration),
        })
        .collect()
}
