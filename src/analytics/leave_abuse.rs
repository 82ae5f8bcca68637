//! Department leave-abuse detection.
//!
//! Compares each department's approved leave days per active employee with
//! the organisation-wide figure and flags departments above
//! `factor × organisation average`.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::config::LeaveAbuseConfig;
use crate::models::{Employee, LeaveAbuseRecord, LeaveRequest};

use super::metrics::round2;

/// Detects departments whose leave usage is disproportionately high.
///
/// Only approved leave belonging to active employees is counted. Returns an
/// empty list when no such leave exists. Output is ordered by department.
///
/// # Example
///
/// ```
/// use attendance_engine::analytics::detect_department_leave_abuse;
/// use attendance_engine::config::LeaveAbuseConfig;
/// use attendance_engine::models::{Employee, LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let employees = vec![
///     Employee::new("E1", "A", "Ops"),
///     Employee::new("E2", "B", "Eng"),
///     Employee::new("E3", "C", "Eng"),
/// ];
/// let leave = LeaveRequest {
///     employee_id: "E1".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
///     status: LeaveStatus::Approved,
/// };
///
/// let flagged = detect_department_leave_abuse(&employees, &[leave], &LeaveAbuseConfig::default());
/// assert_eq!(flagged.len(), 1);
/// assert_eq!(flagged[0].department, "Ops");
/// ```
pub fn detect_department_leave_abuse(
    employees: &[Employee],
    leaves: &[LeaveRequest],
    config: &LeaveAbuseConfig,
) -> Vec<LeaveAbuseRecord> {
    let active: HashMap<&str, &Employee> = employees
        .iter()
        .filter(|e| e.is_active)
        .map(|e| (e.employee_id.as_str(), e))
        .collect();

    let mut department_leave: BTreeMap<&str, u32> = BTreeMap::new();
    for leave in leaves.iter().filter(|l| l.is_approved()) {
        if let Some(employee) = active.get(leave.employee_id.as_str()) {
            *department_leave
                .entry(employee.department.as_str())
                .or_default() += leave.day_count();
        }
    }

    if department_leave.is_empty() {
        return Vec::new();
    }

    let mut headcount: HashMap<&str, u32> = HashMap::new();
    for employee in active.values() {
        *headcount.entry(employee.department.as_str()).or_default() += 1;
    }

    let total_leave: u32 = department_leave.values().sum();
    let total_employees: u32 = headcount.values().sum();
    let org_avg = if total_employees == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(total_leave) / Decimal::from(total_employees)
    };
    let threshold = org_avg * config.factor;

    department_leave
        .into_iter()
        .filter_map(|(department, days)| {
            let staff = headcount.get(department).copied().unwrap_or(0).max(1);
            let avg = Decimal::from(days) / Decimal::from(staff);
            (avg > threshold).then(|| LeaveAbuseRecord {
                department: department.to_string(),
                avg_leave: round2(avg),
                org_avg: round2(org_avg),
            })
        })
        .collect()
}
