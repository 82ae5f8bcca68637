//! Daily attendance compilation.
//!
//! Drives the status resolver across every active employee for a target
//! date and persists one derived row per employee that does not yet have
//! one. Runs are atomic: rows are collected first and written with a single
//! store call, so a conflict aborts the run without a partial write.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::CalendarConfig;
use crate::error::EngineResult;
use crate::models::{CompilationSummary, DerivedDailyAttendance};
use crate::store::AttendanceStore;

use super::status_resolver::resolve_daily_status;

/// Compiles derived attendance for `date`.
///
/// Employees already compiled for the date are skipped, so re-running for
/// the same date is a no-op for them and never alters existing rows.
///
/// # Errors
///
/// Any store failure, including a
/// [`crate::error::EngineError::DuplicateAttendance`] raised because a
/// concurrent run wrote the same row first, aborts the whole run.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::compile_daily_attendance;
/// use attendance_engine::config::CalendarConfig;
/// use attendance_engine::models::Employee;
/// use attendance_engine::store::InMemoryStore;
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::new();
/// store.add_employee(Employee::new("EMP001", "Asha Rao", "Engineering")).unwrap();
/// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
///
/// let first = compile_daily_attendance(&store, day, &CalendarConfig::default()).unwrap();
/// let second = compile_daily_attendance(&store, day, &CalendarConfig::default()).unwrap();
/// assert_eq!((first.compiled, first.skipped), (1, 0));
/// assert_eq!((second.compiled, second.skipped), (0, 1));
/// ```
pub fn compile_daily_attendance<S: AttendanceStore + ?Sized>(
    store: &S,
    date: NaiveDate,
    calendar: &CalendarConfig,
) -> EngineResult<CompilationSummary> {
    let employees = store.active_employees()?;
    let mut rows = Vec::with_capacity(employees.len());
    let mut skipped = 0;

    for employee in &employees {
        if store
            .daily_attendance(&employee.employee_id, date)?
            .is_some()
        {
            skipped += 1;
            continue;
        }

        let resolved = resolve_daily_status(store, &employee.employee_id, date, calendar)?;
        debug!(
            employee_id = %employee.employee_id,
            date = %date,
            status = %resolved.status,
            "Resolved daily status"
        );

        rows.push(DerivedDailyAttendance {
            employee_id: employee.employee_id.clone(),
            date,
            status: resolved.status,
            check_in_time: resolved.check_in_time,
        });
    }

    if !rows.is_empty() {
        if let Err(err) = store.insert_daily_attendance(&rows) {
            warn!(date = %date, error = %err, "Compilation aborted, nothing written");
            return Err(err);
        }
    }

    info!(
        date = %date,
        compiled = rows.len(),
        skipped,
        "Daily attendance compiled"
    );

    Ok(CompilationSummary {
        date,
        compiled: rows.len(),
        skipped,
    })
}
