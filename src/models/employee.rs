//! Employee model.
//!
//! Employees are read-only input from the engine's point of view; the
//! surrounding application owns their lifecycle.

use serde::{Deserialize, Serialize};

/// Represents an employee whose attendance the engine analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable employee identifier (e.g. "EMP001").
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Whether the employee is currently active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Creates an active employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    ///
    /// let employee = Employee::new("EMP001", "Asha Rao", "Engineering");
    /// assert!(employee.is_active);
    /// assert_eq!(employee.department, "Engineering");
    /// ```
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            department: department.into(),
            is_active: true,
        }
    }

    /// Returns the same employee marked inactive.
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}
