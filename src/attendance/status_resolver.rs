//! Daily status resolution.
//!
//! Several signals can describe the same employee-day: an approved leave, an
//! office holiday, a weekend, a check-in. This module collapses them into a
//! single canonical [`DailyStatus`] using a fixed precedence.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::error::EngineResult;
use crate::models::{DailyStatus, LeaveStatus};
use crate::store::AttendanceStore;

/// The resolved status for one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStatus {
    /// Canonical status.
    pub status: DailyStatus,
    /// Check-in time of day; only set when `status` is PRESENT.
    pub check_in_time: Option<NaiveTime>,
}

impl ResolvedStatus {
    fn without_check_in(status: DailyStatus) -> Self {
        Self {
            status,
            check_in_time: None,
        }
    }
}

/// Resolves the canonical status for `employee_id` on `date`.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. An approved leave request covering the date gives [`DailyStatus::Leave`].
/// 2. An office holiday on the date gives [`DailyStatus::Holiday`].
/// 3. A configured weekend day gives [`DailyStatus::Weekend`].
/// 4. A raw fact for the day gives [`DailyStatus::Present`] with the fact's
///    check-in time of day; no fact gives [`DailyStatus::Absent`].
///
/// Only store lookups are performed; nothing is written.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::resolve_daily_status;
/// use attendance_engine::config::CalendarConfig;
/// use attendance_engine::models::{DailyStatus, OfficeHoliday};
/// use attendance_engine::store::InMemoryStore;
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::new();
/// let day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(); // Monday
/// store.add_holiday(OfficeHoliday { event_date: day, name: None }).unwrap();
///
/// let resolved = resolve_daily_status(&store, "EMP001", day, &CalendarConfig::default()).unwrap();
/// assert_eq!(resolved.status, DailyStatus::Holiday);
/// ```
pub fn resolve_daily_status<S: AttendanceStore + ?Sized>(
    store: &S,
    employee_id: &str,
    date: NaiveDate,
    calendar: &CalendarConfig,
) -> EngineResult<ResolvedStatus> {
    let on_leave = store
        .leave_requests(Some(employee_id), Some(LeaveStatus::Approved))?
        .iter()
        .any(|leave| leave.covers(date));
    if on_leave {
        return Ok(ResolvedStatus::without_check_in(DailyStatus::Leave));
    }

    if store.holiday_on(date)?.is_some() {
        return Ok(ResolvedStatus::without_check_in(DailyStatus::Holiday));
    }

    if calendar.is_weekend(date.weekday()) {
        return Ok(ResolvedStatus::without_check_in(DailyStatus::Weekend));
    }

    match store.attendance_on(employee_id, date)? {
        Some(fact) => Ok(ResolvedStatus {
            status: DailyStatus::Present,
            check_in_time: fact.entry_time.map(|t| t.time()),
        }),
        None => Ok(ResolvedStatus::without_check_in(DailyStatus::Absent)),
    }
}
