//! The attendance engine facade.
//!
//! [`AttendanceEngine`] wires the store, the clock and the analytics
//! configuration together and exposes the operations the surrounding
//! application calls.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::analytics::{
    classify_absenteeism_risk, compute_behavior_metrics, detect_attendance_anomalies,
    detect_department_leave_abuse, rank_performers,
};
use crate::attendance::{
    AttendanceWindow, compile_daily_attendance, ensure_known_employee, extract_history,
    window_start,
};
use crate::config::AnalyticsConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AnomalyRecord, AttendanceStatus, CompilationSummary, LeaveAbuseRecord, LeaveStatus,
    MetricsReport, PerformerLists, RiskPrediction, approved_leave_days,
};
use crate::store::{AttendanceStore, Clock};

/// Entry point for compilation and analytics.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use attendance_engine::config::AnalyticsConfig;
/// use attendance_engine::engine::AttendanceEngine;
/// use attendance_engine::models::Employee;
/// use attendance_engine::store::{FixedClock, InMemoryStore};
/// use chrono::NaiveDate;
///
/// let store = Arc::new(InMemoryStore::new());
/// store.add_employee(Employee::new("EMP001", "Asha Rao", "Engineering")).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
///
/// let engine = AttendanceEngine::new(store, Arc::new(FixedClock(today)), AnalyticsConfig::default());
/// let summary = engine.compile(None).unwrap();
/// assert_eq!(summary.date, today);
/// assert_eq!(summary.compiled, 1);
/// ```
#[derive(Clone)]
pub struct AttendanceEngine {
    store: Arc<dyn AttendanceStore>,
    clock: Arc<dyn Clock>,
    config: AnalyticsConfig,
}

impl AttendanceEngine {
    /// Creates an engine over the given collaborators.
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        clock: Arc<dyn Clock>,
        config: AnalyticsConfig,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Returns the analytics configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Today's date according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Compiles derived attendance for `date`, defaulting to today.
    pub fn compile(&self, date: Option<NaiveDate>) -> EngineResult<CompilationSummary> {
        let date = date.unwrap_or_else(|| self.today());
        compile_daily_attendance(self.store.as_ref(), date, &self.config.calendar)
    }

    /// Loads the trailing history window for one employee or everyone.
    pub fn history(&self, employee_id: Option<&str>) -> EngineResult<AttendanceWindow> {
        extract_history(
            self.store.as_ref(),
            self.today(),
            employee_id,
            &self.config.window,
        )
    }

    /// Computes the metrics report for `window`.
    ///
    /// When `employee_id` is given, that employee's approved leave over their
    /// whole history is included and the id must be known to the store. An
    /// empty window always yields [`MetricsReport::default`].
    pub fn metrics(
        &self,
        window: &AttendanceWindow,
        employee_id: Option<&str>,
    ) -> EngineResult<MetricsReport> {
        if window.is_empty() {
            return Ok(MetricsReport::default());
        }

        let leave_days = match employee_id {
            Some(id) => {
                ensure_known_employee(self.store.as_ref(), id)?;
                approved_leave_days(
                    &self
                        .store
                        .leave_requests(Some(id), Some(LeaveStatus::Approved))?,
                )
            }
            None => 0,
        };

        Ok(compute_behavior_metrics(
            window,
            leave_days,
            &self.config.scoring,
        ))
    }

    /// Flags unusual work durations in `window`.
    pub fn anomalies(&self, window: &AttendanceWindow) -> Vec<AnomalyRecord> {
        detect_attendance_anomalies(window, &self.config.anomaly)
    }

    /// Flags departments whose leave usage is disproportionately high.
    pub fn department_leave_abuse(&self) -> EngineResult<Vec<LeaveAbuseRecord>> {
        let employees = self.store.active_employees()?;
        let leaves = self
            .store
            .leave_requests(None, Some(LeaveStatus::Approved))?;
        Ok(detect_department_leave_abuse(
            &employees,
            &leaves,
            &self.config.leave_abuse,
        ))
    }

    /// Predicts absenteeism risk for one employee.
    pub fn predict_risk(&self, employee_id: &str) -> EngineResult<RiskPrediction> {
        ensure_known_employee(self.store.as_ref(), employee_id)?;

        let today = self.today();
        let since = window_start(
            today,
            self.config.window.risk_lookback_days,
            "risk_lookback_days",
        )?;
        let recent_absences = self
            .store
            .attendance_between(Some(employee_id), since, today)?
            .iter()
            .filter(|f| f.status == AttendanceStatus::Absent)
            .count();
        let recent_absences = u32::try_from(recent_absences).unwrap_or(u32::MAX);

        let window = self.history(Some(employee_id))?;
        let metrics = self.metrics(&window, Some(employee_id))?;

        debug!(
            employee_id,
            recent_absences,
            attendance_score = metrics.attendance_score,
            "Assessing absenteeism risk"
        );

        Ok(classify_absenteeism_risk(
            employee_id,
            recent_absences,
            metrics.attendance_score,
            &self.config.absenteeism,
        ))
    }

    /// Partitions active employees into top and low performers.
    ///
    /// Loads the organisation-wide window and approved leave once and
    /// aggregates per employee.
    pub fn performer_lists(&self) -> EngineResult<PerformerLists> {
        let employees = self.store.active_employees()?;
        let windows = self.history(None)?.group_by_employee();

        let mut leave_days: HashMap<String, u32> = HashMap::new();
        for leave in self
            .store
            .leave_requests(None, Some(LeaveStatus::Approved))?
        {
            *leave_days.entry(leave.employee_id.clone()).or_default() += leave.day_count();
        }

        Ok(rank_performers(
            &employees,
            &windows,
            &leave_days,
            &self.config.scoring,
            &self.config.performers,
        ))
    }
}

/// Parses a `YYYY-MM-DD` date, naming `field` on failure.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::parse_date;
///
/// assert!(parse_date("date", "2026-03-02").is_ok());
/// assert!(parse_date("date", "02/03/2026").is_err());
/// ```
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        EngineError::invalid_input(field, format!("'{}' is not a YYYY-MM-DD date: {}", value, e))
    })
}
