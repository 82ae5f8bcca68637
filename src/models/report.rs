//! Read-only reporting structures handed to the presentation layer.
//!
//! Every type here is a value object. [`MetricsReport`] in particular is a
//! fixed-shape contract: each key is always present, even for empty input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart labels paired positionally with [`ChartBreakdown::values`].
pub const CHART_LABELS: [&str; 4] = ["Present", "Absent", "Leave", "Late"];

/// Discretised risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Chart-ready breakdown of day counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBreakdown {
    /// Series labels.
    pub labels: Vec<String>,
    /// Series values, positionally matching `labels`.
    pub values: Vec<u32>,
}

impl ChartBreakdown {
    /// Builds the standard Present/Absent/Leave/Late breakdown.
    pub fn from_counts(present: u32, absent: u32, leave: u32, late: u32) -> Self {
        Self {
            labels: CHART_LABELS.iter().map(|l| l.to_string()).collect(),
            values: vec![present, absent, leave, late],
        }
    }
}

/// Behavioural metrics for one employee or a group of employees.
///
/// Hour figures serialize as JSON numbers.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{MetricsReport, RiskLevel};
///
/// let report = MetricsReport::default();
/// assert_eq!(report.attendance_score, 0);
/// assert_eq!(report.risk_level, RiskLevel::High);
/// assert!(report.chart_breakdown.labels.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Mean check-in hour, 2 dp.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_login_hour: Decimal,
    /// Mean hours worked, 2 dp.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_work_hours: Decimal,
    /// Days checked in after the late threshold hour.
    pub late_arrival_days: u32,
    /// ABSENT rows in the analysed table.
    pub absent_days: u32,
    /// Approved leave days over the employee's full history.
    pub leave_days: u32,
    /// PRESENT rows in the analysed table.
    pub present_days: u32,
    /// Shortest day worked, 2 dp.
    #[serde(with = "rust_decimal::serde::float")]
    pub min_work_hours: Decimal,
    /// Longest day worked, 2 dp.
    #[serde(with = "rust_decimal::serde::float")]
    pub max_work_hours: Decimal,
    /// Number of rows analysed.
    pub total_days_analyzed: u32,
    /// Absence trend label.
    pub absence_trend: String,
    /// Score in `[0, 100]`.
    pub attendance_score: u32,
    /// Classification of `attendance_score`.
    pub risk_level: RiskLevel,
    /// Chart data.
    pub chart_breakdown: ChartBreakdown,
}

impl Default for MetricsReport {
    fn default() -> Self {
        Self {
            average_login_hour: Decimal::ZERO,
            average_work_hours: Decimal::ZERO,
            late_arrival_days: 0,
            absent_days: 0,
            leave_days: 0,
            present_days: 0,
            min_work_hours: Decimal::ZERO,
            max_work_hours: Decimal::ZERO,
            total_days_analyzed: 0,
            absence_trend: "stable".to_string(),
            attendance_score: 0,
            risk_level: RiskLevel::High,
            chart_breakdown: ChartBreakdown::default(),
        }
    }
}

/// A day whose work duration is statistically unusual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// The employee the day belongs to.
    pub employee_id: String,
    /// The date, formatted `YYYY-MM-DD`.
    pub date: String,
    /// Human-readable reason.
    pub reason: String,
}

/// A department whose average leave exceeds the organisation's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAbuseRecord {
    /// Department name.
    pub department: String,
    /// Approved leave days per active employee in the department, 2 dp.
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_leave: Decimal,
    /// Approved leave days per active employee organisation-wide, 2 dp.
    #[serde(with = "rust_decimal::serde::float")]
    pub org_avg: Decimal,
}

/// Absenteeism risk for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPrediction {
    /// The employee assessed.
    pub employee_id: String,
    /// Risk classification.
    pub risk: RiskLevel,
    /// Raw score the classification was derived from.
    pub risk_score: u32,
}

/// One entry in a performer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerRecord {
    /// Employee display name.
    pub name: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Attendance score.
    pub score: u32,
}

/// Top and low performer partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerLists {
    /// Employees at or above the top threshold.
    pub top: Vec<PerformerRecord>,
    /// Employees below the low threshold.
    pub low: Vec<PerformerRecord>,
}

/// Outcome of one compilation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationSummary {
    /// The compiled date.
    pub date: NaiveDate,
    /// Rows written by this run.
    pub compiled: usize,
    /// Active employees already compiled for the date.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_serializes_every_key() {
        let json = serde_json::to_value(MetricsReport::default()).unwrap();
        for key in [
            "average_login_hour",
            "average_work_hours",
            "late_arrival_days",
            "absent_days",
            "leave_days",
            "present_days",
            "min_work_hours",
            "max_work_hours",
            "total_days_analyzed",
            "absence_trend",
            "attendance_score",
            "risk_level",
            "chart_breakdown",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["risk_level"], "high");
        assert_eq!(json["absence_trend"], "stable");
        assert_eq!(json["chart_breakdown"]["labels"], serde_json::json!([]));
    }

    #[test]
    fn test_hour_figures_serialize_as_numbers() {
        let report = MetricsReport {
            average_work_hours: Decimal::new(76, 1),
            max_work_hours: Decimal::new(925, 2),
            ..MetricsReport::default()
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["average_work_hours"].as_f64(), Some(7.6));
        assert_eq!(json["max_work_hours"].as_f64(), Some(9.25));
        assert_eq!(json["average_login_hour"].as_f64(), Some(0.0));
    }

    #[test]
    fn test_leave_abuse_averages_serialize_as_numbers() {
        let record = LeaveAbuseRecord {
            department: "Sales".to_string(),
            avg_leave: Decimal::new(8, 0),
            org_avg: Decimal::new(425, 2),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["avg_leave"].as_f64(), Some(8.0));
        assert_eq!(json["org_avg"].as_f64(), Some(4.25));
    }

    #[test]
    fn test_chart_breakdown_pairs_labels_and_values() {
        let chart = ChartBreakdown::from_counts(20, 2, 3, 4);
        assert_eq!(chart.labels, vec!["Present", "Absent", "Leave", "Late"]);
        assert_eq!(chart.values, vec![20, 2, 3, 4]);
    }

    #[test]
    fn test_risk_level_display_is_lowercase() {
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Low).unwrap(),
            "\"low\""
        );
    }
}
