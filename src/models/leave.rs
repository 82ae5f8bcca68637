//! Leave request and office holiday models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; the only state that counts towards leave days.
    Approved,
    /// Rejected.
    Rejected,
}

/// A leave request covering an inclusive date range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveRequest {
///     employee_id: "EMP001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
///     status: LeaveStatus::Approved,
/// };
///
/// assert_eq!(leave.day_count(), 7);
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The requesting employee.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval state.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Number of calendar days covered, counting both ends.
    ///
    /// An inverted range counts as zero days.
    pub fn day_count(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }

    /// Returns true if `date` falls inside the inclusive range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns true if the request is approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Rejects requests whose end date precedes their start date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "employee_id",
                "leave request has an empty employee id",
            ));
        }
        if self.end_date < self.start_date {
            return Err(EngineError::invalid_input(
                "end_date",
                format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        Ok(())
    }
}

/// Sums the days of every approved request.
pub fn approved_leave_days<'a>(requests: impl IntoIterator<Item = &'a LeaveRequest>) -> u32 {
    requests
        .into_iter()
        .filter(|r| r.is_approved())
        .map(LeaveRequest::day_count)
        .sum()
}

/// A date on which the office is closed for everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHoliday {
    /// The holiday date.
    pub event_date: NaiveDate,
    /// Optional holiday name.
    #[serde(default)]
    pub name: Option<String>,
}
