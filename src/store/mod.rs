//! Collaborator seams for the Attendance Engine.
//!
//! The engine never owns persistence or the system clock. It reads and
//! writes through [`AttendanceStore`] and asks a [`Clock`] for "today", so
//! callers can back it with a database and tests can pin the date.

mod clock;
mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{
    DerivedDailyAttendance, Employee, LeaveRequest, LeaveStatus, OfficeHoliday, RawAttendanceFact,
};

pub use clock::{Clock, FixedClock, SystemClock};
pub use memory::InMemoryStore;

/// Read access to employee, attendance, leave and holiday facts, plus the
/// single write the engine performs: persisting compiled daily rows.
///
/// Implementations must enforce uniqueness of `(employee_id, date)` for
/// derived rows and must apply [`AttendanceStore::insert_daily_attendance`]
/// atomically.
pub trait AttendanceStore: Send + Sync {
    /// All employees with the active flag set.
    fn active_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Looks up one employee regardless of active flag.
    fn employee(&self, employee_id: &str) -> EngineResult<Option<Employee>>;

    /// The raw fact for an employee on a date, if any.
    fn attendance_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<RawAttendanceFact>>;

    /// Raw facts with `start <= date <= end`, for one employee or everyone.
    fn attendance_between(
        &self,
        employee_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<RawAttendanceFact>>;

    /// Leave requests, optionally filtered by employee and approval status.
    fn leave_requests(
        &self,
        employee_id: Option<&str>,
        status: Option<LeaveStatus>,
    ) -> EngineResult<Vec<LeaveRequest>>;

    /// The office holiday on `date`, if any.
    fn holiday_on(&self, date: NaiveDate) -> EngineResult<Option<OfficeHoliday>>;

    /// The compiled row for an employee on a date, if any.
    fn daily_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<DerivedDailyAttendance>>;

    /// Writes all rows or none.
    ///
    /// Fails with [`crate::error::EngineError::DuplicateAttendance`] if any
    /// row collides with an existing row or with another row in the batch.
    fn insert_daily_attendance(&self, rows: &[DerivedDailyAttendance]) -> EngineResult<()>;
}
