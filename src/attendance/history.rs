//! Attendance history extraction.
//!
//! Loads the trailing window of raw facts into an [`AttendanceWindow`], an
//! ordered collection of plain rows that the analytics consume. Facts with
//! no entry timestamp are dropped; they never reach the analytics table.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::WindowConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceStatus, RawAttendanceFact};
use crate::store::AttendanceStore;

/// One checked-in day in the analytics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// Check-in timestamp.
    pub entry_time: NaiveDateTime,
    /// Hours worked; zero when the source had none.
    pub duration: Decimal,
    /// Raw status.
    pub status: AttendanceStatus,
}

impl AttendanceRow {
    /// Converts a raw fact, returning `None` when it has no entry timestamp.
    pub fn from_fact(fact: RawAttendanceFact) -> Option<Self> {
        let entry_time = fact.entry_time?;
        let duration = fact.duration_or_zero();
        Some(Self {
            employee_id: fact.employee_id,
            date: fact.date,
            entry_time,
            duration,
            status: fact.status,
        })
    }

    /// Hour-of-day of the check-in.
    pub fn login_hour(&self) -> u32 {
        self.entry_time.hour()
    }
}

/// Date-ordered rows for one or many employees.
///
/// The window need not be contiguous; days without a check-in are simply
/// absent from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceWindow {
    rows: Vec<AttendanceRow>,
}

impl AttendanceWindow {
    /// Builds a window from raw facts, dropping those without a timestamp
    /// and ordering the rest by date then employee.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::attendance::AttendanceWindow;
    /// use attendance_engine::models::RawAttendanceFact;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    /// let window = AttendanceWindow::from_facts(vec![
    ///     RawAttendanceFact::present("EMP001", day.and_hms_opt(9, 0, 0).unwrap(), Decimal::new(8, 0)),
    ///     RawAttendanceFact::absent("EMP001", day.succ_opt().unwrap()),
    /// ]);
    /// assert_eq!(window.len(), 1);
    /// assert_eq!(window.rows()[0].login_hour(), 9);
    /// ```
    pub fn from_facts(facts: impl IntoIterator<Item = RawAttendanceFact>) -> Self {
        Self::from_rows(facts.into_iter().filter_map(AttendanceRow::from_fact).collect())
    }

    /// Builds a window from rows, ordering them by date then employee.
    pub fn from_rows(mut rows: Vec<AttendanceRow>) -> Self {
        rows.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });
        Self { rows }
    }

    /// The rows, in date order.
    pub fn rows(&self) -> &[AttendanceRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the window has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits the window into one window per employee, preserving order.
    pub fn group_by_employee(&self) -> BTreeMap<String, AttendanceWindow> {
        let mut groups: BTreeMap<String, Vec<AttendanceRow>> = BTreeMap::new();
        for row in &self.rows {
            groups
                .entry(row.employee_id.clone())
                .or_default()
                .push(row.clone());
        }
        groups
            .into_iter()
            .map(|(id, rows)| (id, AttendanceWindow { rows }))
            .collect()
    }
}

/// Loads the trailing `history_days` of checked-in facts ending at `today`.
///
/// With `employee_id` the table is restricted to that employee, who must
/// exist in the store; without it every employee's facts are included.
pub fn extract_history<S: AttendanceStore + ?Sized>(
    store: &S,
    today: NaiveDate,
    employee_id: Option<&str>,
    window: &WindowConfig,
) -> EngineResult<AttendanceWindow> {
    if let Some(id) = employee_id {
        ensure_known_employee(store, id)?;
    }

    let start = window_start(today, window.history_days, "history_days")?;
    let facts = store.attendance_between(employee_id, start, today)?;
    let fact_count = facts.len();
    let history = AttendanceWindow::from_facts(facts);

    debug!(
        employee_id = employee_id.unwrap_or("*"),
        start = %start,
        end = %today,
        facts = fact_count,
        rows = history.len(),
        "Loaded attendance history"
    );

    Ok(history)
}

/// The first day of a `days`-long window ending at `today`.
pub(crate) fn window_start(today: NaiveDate, days: i64, field: &str) -> EngineResult<NaiveDate> {
    Duration::try_days(days)
        .and_then(|span| today.checked_sub_signed(span))
        .ok_or_else(|| {
            EngineError::invalid_input(field, format!("{} days reaches past the calendar", days))
        })
}

/// Fails unless `employee_id` is non-empty and known to the store.
pub(crate) fn ensure_known_employee<S: AttendanceStore + ?Sized>(
    store: &S,
    employee_id: &str,
) -> EngineResult<()> {
    if employee_id.trim().is_empty() {
        return Err(EngineError::invalid_input(
            "employee_id",
            "employee id must not be empty",
        ));
    }
    if store.employee(employee_id)?.is_none() {
        return Err(EngineError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        });
    }
    Ok(())
}
