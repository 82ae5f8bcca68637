//! In-memory [`AttendanceStore`] implementation.

use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DerivedDailyAttendance, Employee, LeaveRequest, LeaveStatus, OfficeHoliday, RawAttendanceFact,
};

use super::AttendanceStore;

#[derive(Debug, Default)]
struct Tables {
    employees: BTreeMap<String, Employee>,
    attendance: Vec<RawAttendanceFact>,
    leaves: Vec<LeaveRequest>,
    holidays: BTreeMap<NaiveDate, OfficeHoliday>,
    daily: BTreeMap<(String, NaiveDate), DerivedDailyAttendance>,
}

/// A thread-safe store held entirely in memory.
///
/// Derived rows are keyed by `(employee_id, date)`, which gives the
/// uniqueness guarantee the compiler relies on.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Employee;
/// use attendance_engine::store::{AttendanceStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// store.add_employee(Employee::new("EMP001", "Asha Rao", "Engineering")).unwrap();
/// assert_eq!(store.active_employees().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| EngineError::StoreUnavailable {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| EngineError::StoreUnavailable {
            message: "store lock poisoned".to_string(),
        })
    }

    /// Inserts or replaces an employee.
    pub fn add_employee(&self, employee: Employee) -> EngineResult<()> {
        if employee.employee_id.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "employee_id",
                "employee id must not be empty",
            ));
        }
        self.write()?
            .employees
            .insert(employee.employee_id.clone(), employee);
        Ok(())
    }

    /// Appends a raw attendance fact.
    pub fn add_attendance(&self, fact: RawAttendanceFact) -> EngineResult<()> {
        self.write()?.attendance.push(fact);
        Ok(())
    }

    /// Appends a leave request after validating its date range.
    pub fn add_leave_request(&self, request: LeaveRequest) -> EngineResult<()> {
        request.validate()?;
        self.write()?.leaves.push(request);
        Ok(())
    }

    /// Marks a date as an office holiday.
    pub fn add_holiday(&self, holiday: OfficeHoliday) -> EngineResult<()> {
        self.write()?.holidays.insert(holiday.event_date, holiday);
        Ok(())
    }

    /// All compiled rows, ordered by employee then date.
    pub fn daily_rows(&self) -> EngineResult<Vec<DerivedDailyAttendance>> {
        Ok(self.read()?.daily.values().cloned().collect())
    }
}

impl AttendanceStore for InMemoryStore {
    fn active_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self
            .read()?
            .employees
            .values()
            .filter(|e| e.is_active)
            .cloned()
            .collect())
    }

    fn employee(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.read()?.employees.get(employee_id).cloned())
    }

    fn attendance_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<RawAttendanceFact>> {
        Ok(self
            .read()?
            .attendance
            .iter()
            .find(|f| f.employee_id == employee_id && f.date == date)
            .cloned())
    }

    fn attendance_between(
        &self,
        employee_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<RawAttendanceFact>> {
        Ok(self
            .read()?
            .attendance
            .iter()
            .filter(|f| employee_id.is_none_or(|id| f.employee_id == id))
            .filter(|f| start <= f.date && f.date <= end)
            .cloned()
            .collect())
    }

    fn leave_requests(
        &self,
        employee_id: Option<&str>,
        status: Option<LeaveStatus>,
    ) -> EngineResult<Vec<LeaveRequest>> {
        Ok(self
            .read()?
            .leaves
            .iter()
            .filter(|l| employee_id.is_none_or(|id| l.employee_id == id))
            .filter(|l| status.is_none_or(|s| l.status == s))
            .cloned()
            .collect())
    }

    fn holiday_on(&self, date: NaiveDate) -> EngineResult<Option<OfficeHoliday>> {
        Ok(self.read()?.holidays.get(&date).cloned())
    }

    fn daily_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<DerivedDailyAttendance>> {
        Ok(self
            .read()?
            .daily
            .get(&(employee_id.to_string(), date))
            .cloned())
    }

    fn insert_daily_attendance(&self, rows: &[DerivedDailyAttendance]) -> EngineResult<()> {
        let mut tables = self.write()?;

        let mut batch_keys = HashSet::with_capacity(rows.len());
        for row in rows {
            let key = (row.employee_id.clone(), row.date);
            if tables.daily.contains_key(&key) || !batch_keys.insert(key) {
                return Err(EngineError::DuplicateAttendance {
                    employee_id: row.employee_id.clone(),
                    date: row.date,
                });
            }
        }

        for row in rows {
            tables
                .daily
                .insert((row.employee_id.clone(), row.date), row.clone());
        }
        Ok(())
    }
}
