//! Absenteeism risk prediction and performer ranking.

use std::collections::{BTreeMap, HashMap};

use crate::attendance::AttendanceWindow;
use crate::config::{AbsenteeismConfig, PerformerConfig, ScoringConfig};
use crate::models::{Employee, PerformerLists, PerformerRecord, RiskLevel, RiskPrediction};

use super::metrics::compute_behavior_metrics;

/// Combines recent raw absences and the attendance score into a risk tier.
///
/// `risk_score = recent_absences × absence_weight`, plus `low_score_penalty`
/// when `attendance_score` is below `low_score_threshold`.
///
/// # Example
///
/// ```
/// use attendance_engine::analytics::classify_absenteeism_risk;
/// use attendance_engine::config::AbsenteeismConfig;
/// use attendance_engine::models::RiskLevel;
///
/// let prediction = classify_absenteeism_risk("EMP001", 2, 65, &AbsenteeismConfig::default());
/// assert_eq!(prediction.risk_score, 14);
/// assert_eq!(prediction.risk, RiskLevel::Medium);
/// ```
pub fn classify_absenteeism_risk(
    employee_id: &str,
    recent_absences: u32,
    attendance_score: u32,
    config: &AbsenteeismConfig,
) -> RiskPrediction {
    let mut risk_score = recent_absences.saturating_mul(config.absence_weight);
    if attendance_score < config.low_score_threshold {
        risk_score = risk_score.saturating_add(config.low_score_penalty);
    }

    let risk = if risk_score >= config.high_at {
        RiskLevel::High
    } else if risk_score >= config.medium_at {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskPrediction {
        employee_id: employee_id.to_string(),
        risk,
        risk_score,
    }
}

/// Partitions active employees into top and low performers.
///
/// `windows` holds each employee's history and `leave_days` their approved
/// leave totals, both loaded once for the whole organisation. Employees
/// with no present day, and those scoring between the two thresholds,
/// appear in neither list.
pub fn rank_performers(
    employees: &[Employee],
    windows: &BTreeMap<String, AttendanceWindow>,
    leave_days: &HashMap<String, u32>,
    scoring: &ScoringConfig,
    thresholds: &PerformerConfig,
) -> PerformerLists {
    let empty = AttendanceWindow::default();
    let mut lists = PerformerLists::default();

    for employee in employees.iter().filter(|e| e.is_active) {
        let window = windows.get(&employee.employee_id).unwrap_or(&empty);
        let leave = leave_days.get(&employee.employee_id).copied().unwrap_or(0);
        let metrics = compute_behavior_metrics(window, leave, scoring);

        if metrics.present_days == 0 {
            continue;
        }

        let record = PerformerRecord {
            name: employee.name.clone(),
            employee_id: employee.employee_id.clone(),
            score: metrics.attendance_score,
        };

        if metrics.attendance_score >= thresholds.top_at {
            lists.top.push(record);
        } else if metrics.attendance_score < thresholds.low_below {
            lists.low.push(record);
        }
    }

    lists
}
