//! Core data models for the Attendance Engine.
//!
//! This module contains the employee, attendance, leave and reporting types
//! used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod report;

pub use attendance::{AttendanceStatus, DailyStatus, DerivedDailyAttendance, RawAttendanceFact};
pub use employee::Employee;
pub use leave::{LeaveRequest, LeaveStatus, OfficeHoliday, approved_leave_days};
pub use report::{
    AnomalyRecord, CHART_LABELS, ChartBreakdown, CompilationSummary, LeaveAbuseRecord,
    MetricsReport, PerformerLists, PerformerRecord, RiskLevel, RiskPrediction,
};
