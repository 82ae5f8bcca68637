//! Configuration types for attendance analytics.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the analytics YAML file. Every section falls back
//! to its default, so a partial file only overrides what it names.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Lookback windows, in days, measured back from "today".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Span of the attendance history table.
    pub history_days: i64,
    /// Span over which raw absences feed the absenteeism risk score.
    pub risk_lookback_days: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            history_days: 180,
            risk_lookback_days: 90,
        }
    }
}

impl WindowConfig {
    /// Longest accepted window, in days.
    pub const MAX_DAYS: i64 = 36_500;
}

/// Calendar rules used by the daily status resolver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Days of the week treated as non-working.
    pub weekend_days: Vec<Weekday>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

impl CalendarConfig {
    /// Returns true if `weekday` is configured as a weekend day.
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.weekend_days.contains(&weekday)
    }
}

/// Attendance score deductions and risk bands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Check-ins with an hour strictly greater than this are late.
    pub late_after_hour: u32,
    /// Points deducted per late arrival.
    pub late_penalty: u32,
    /// Points deducted per absent day.
    pub absence_penalty: u32,
    /// Points deducted per approved leave day.
    pub leave_penalty: u32,
    /// Scores below this are high risk.
    pub high_risk_below: u32,
    /// Scores below this (and not high risk) are medium risk.
    pub medium_risk_below: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            late_after_hour: 10,
            late_penalty: 2,
            absence_penalty: 6,
            leave_penalty: 1,
            high_risk_below: 60,
            medium_risk_below: 80,
        }
    }
}

/// Work-duration anomaly detection settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Tables with fewer rows are not analysed.
    pub min_rows: usize,
    /// Rows with `|z|` strictly above this are flagged.
    pub z_threshold: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            min_rows: 10,
            z_threshold: 2.0,
        }
    }
}

/// Department leave-abuse settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaveAbuseConfig {
    /// A department is flagged when its average exceeds `factor × org average`.
    pub factor: Decimal,
}

impl Default for LeaveAbuseConfig {
    fn default() -> Self {
        Self {
            factor: Decimal::new(15, 1),
        }
    }
}

/// Absenteeism risk weights and bands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AbsenteeismConfig {
    /// Points per raw absence in the lookback window.
    pub absence_weight: u32,
    /// Attendance scores below this add `low_score_penalty`.
    pub low_score_threshold: u32,
    /// Points added for a low attendance score.
    pub low_score_penalty: u32,
    /// Risk scores at or above this are high.
    pub high_at: u32,
    /// Risk scores at or above this (and not high) are medium.
    pub medium_at: u32,
}

impl Default for AbsenteeismConfig {
    fn default() -> Self {
        Self {
            absence_weight: 2,
            low_score_threshold: 70,
            low_score_penalty: 10,
            high_at: 20,
            medium_at: 10,
        }
    }
}

/// Performer ranking thresholds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerformerConfig {
    /// Scores at or above this are top performers.
    pub top_at: u32,
    /// Scores below this are low performers.
    pub low_below: u32,
}

impl Default for PerformerConfig {
    fn default() -> Self {
        Self {
            top_at: 85,
            low_below: 60,
        }
    }
}

/// The complete analytics configuration.
///
/// `AnalyticsConfig::default()` carries the standard thresholds; a YAML
/// file loaded through [`super::ConfigLoader`] may override any of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Lookback windows.
    pub window: WindowConfig,
    /// Calendar rules.
    pub calendar: CalendarConfig,
    /// Score deductions and risk bands.
    pub scoring: ScoringConfig,
    /// Anomaly detection.
    pub anomaly: AnomalyConfig,
    /// Leave abuse detection.
    pub leave_abuse: LeaveAbuseConfig,
    /// Absenteeism risk.
    pub absenteeism: AbsenteeismConfig,
    /// Performer ranking.
    pub performers: PerformerConfig,
}
