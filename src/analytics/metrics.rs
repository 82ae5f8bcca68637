//! Behavioural metrics.
//!
//! Turns an [`AttendanceWindow`] into the fixed-shape [`MetricsReport`]
//! consumed by dashboards. The computation never fails: an empty window
//! yields [`MetricsReport::default`].

use rust_decimal::Decimal;

use crate::attendance::AttendanceWindow;
use crate::config::ScoringConfig;
use crate::models::{AttendanceStatus, ChartBreakdown, MetricsReport, RiskLevel};

/// Computes the metrics report for `window`.
///
/// `leave_days` is the employee's approved leave total; pass 0 when the
/// report is not for a single employee.
///
/// # Example
///
/// ```
/// use attendance_engine::analytics::compute_behavior_metrics;
/// use attendance_engine::attendance::AttendanceWindow;
/// use attendance_engine::config::ScoringConfig;
/// use attendance_engine::models::{MetricsReport, RawAttendanceFact, RiskLevel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let empty = compute_behavior_metrics(&AttendanceWindow::default(), 3, &ScoringConfig::default());
/// assert_eq!(empty, MetricsReport::default());
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let window = AttendanceWindow::from_facts(vec![RawAttendanceFact::present(
///     "EMP001",
///     day.and_hms_opt(11, 30, 0).unwrap(),
///     Decimal::new(75, 1),
/// )]);
/// let report = compute_behavior_metrics(&window, 0, &ScoringConfig::default());
/// assert_eq!(report.late_arrival_days, 1);
/// assert_eq!(report.attendance_score, 98);
/// assert_eq!(report.risk_level, RiskLevel::Low);
/// ```
pub fn compute_behavior_metrics(
    window: &AttendanceWindow,
    leave_days: u32,
    scoring: &ScoringConfig,
) -> MetricsReport {
    let rows = window.rows();
    if rows.is_empty() {
        return MetricsReport::default();
    }

    let present = count_u32(rows.iter().filter(|r| r.status == AttendanceStatus::Present));
    let absent = count_u32(rows.iter().filter(|r| r.status == AttendanceStatus::Absent));
    let late = count_u32(rows.iter().filter(|r| r.login_hour() > scoring.late_after_hour));

    let login_hours: Vec<Decimal> = rows.iter().map(|r| Decimal::from(r.login_hour())).collect();
    let durations: Vec<Decimal> = rows.iter().map(|r| r.duration).collect();

    let score = attendance_score(present, absent, late, leave_days, scoring);

    MetricsReport {
        average_login_hour: round2(mean(&login_hours)),
        average_work_hours: round2(mean(&durations)),
        late_arrival_days: late,
        absent_days: absent,
        leave_days,
        present_days: present,
        min_work_hours: round2(durations.iter().copied().min().unwrap_or(Decimal::ZERO)),
        max_work_hours: round2(durations.iter().copied().max().unwrap_or(Decimal::ZERO)),
        total_days_analyzed: count_u32(rows.iter()),
        absence_trend: "stable".to_string(),
        attendance_score: score,
        risk_level: classify_attendance_score(score, scoring),
        chart_breakdown: ChartBreakdown::from_counts(present, absent, leave_days, late),
    }
}

/// Scores attendance out of 100.
///
/// Starts at 100 and deducts per late arrival, absence and leave day. An
/// employee with no present days scores 0. The result never drops below 0.
pub fn attendance_score(
    present_days: u32,
    absent_days: u32,
    late_arrival_days: u32,
    leave_days: u32,
    scoring: &ScoringConfig,
) -> u32 {
    if present_days == 0 {
        return 0;
    }

    let deductions = i64::from(late_arrival_days) * i64::from(scoring.late_penalty)
        + i64::from(absent_days) * i64::from(scoring.absence_penalty)
        + i64::from(leave_days) * i64::from(scoring.leave_penalty);

    (100 - deductions).clamp(0, 100) as u32
}

/// Maps an attendance score onto a [`RiskLevel`].
pub fn classify_attendance_score(score: u32, scoring: &ScoringConfig) -> RiskLevel {
    if score < scoring.high_risk_below {
        RiskLevel::High
    } else if score < scoring.medium_risk_below {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn count_u32<T>(iter: impl Iterator<Item = T>) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}

fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len())
}

/// Rounds half to even at 2 dp.
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}
