//! Request types for the Attendance Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::parse_date;
use crate::error::EngineResult;

/// Request body for `POST /attendance/compile`.
///
/// The date is kept as text so that a malformed value is reported as an
/// invalid `date` field rather than a generic JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Target date as `YYYY-MM-DD`; today when omitted.
    #[serde(default)]
    pub date: Option<String>,
}

impl CompileRequest {
    /// Parses the target date, if one was given.
    pub fn target_date(&self) -> EngineResult<Option<NaiveDate>> {
        self.date
            .as_deref()
            .map(|value| parse_date("date", value))
            .transpose()
    }
}

/// Query string accepted by the history and analytics endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeQuery {
    /// Restrict to one employee; everyone when omitted.
    #[serde(default)]
    pub employee_id: Option<String>,
}
