//! Raw and derived attendance records.
//!
//! [`RawAttendanceFact`] is what the check-in system records; a
//! [`DerivedDailyAttendance`] is the compiled system of record for one
//! employee on one date.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status carried by a raw check-in fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// The employee checked in.
    Present,
    /// The employee was recorded absent.
    Absent,
}

/// Canonical status of a compiled attendance day.
///
/// Variants are listed in resolution precedence after the raw-fact outcome:
/// leave beats holiday, holiday beats weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DailyStatus {
    /// A raw fact exists for the day.
    Present,
    /// No raw fact exists for a working day.
    Absent,
    /// Covered by an approved leave request.
    Leave,
    /// An office holiday.
    Holiday,
    /// A configured weekend day.
    Weekend,
}

impl std::fmt::Display for DailyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DailyStatus::Present => write!(f, "PRESENT"),
            DailyStatus::Absent => write!(f, "ABSENT"),
            DailyStatus::Leave => write!(f, "LEAVE"),
            DailyStatus::Holiday => write!(f, "HOLIDAY"),
            DailyStatus::Weekend => write!(f, "WEEKEND"),
        }
    }
}

/// A raw attendance fact as captured by the check-in system.
///
/// One fact is expected per employee per worked day. Duplicates are not
/// collapsed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAttendanceFact {
    /// The employee the fact belongs to.
    pub employee_id: String,
    /// The calendar date of the fact.
    pub date: NaiveDate,
    /// When the employee checked in, if recorded.
    pub entry_time: Option<NaiveDateTime>,
    /// Hours worked, if recorded.
    #[serde(default)]
    pub duration: Option<Decimal>,
    /// Raw status.
    pub status: AttendanceStatus,
}

impl RawAttendanceFact {
    /// Creates a present fact checked in at `entry_time` with `duration` hours worked.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceStatus, RawAttendanceFact};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = NaiveDate::from_ymd_opt(2026, 3, 2)
    ///     .unwrap()
    ///     .and_hms_opt(9, 15, 0)
    ///     .unwrap();
    /// let fact = RawAttendanceFact::present("EMP001", entry, Decimal::new(80, 1));
    /// assert_eq!(fact.status, AttendanceStatus::Present);
    /// assert_eq!(fact.date, entry.date());
    /// ```
    pub fn present(
        employee_id: impl Into<String>,
        entry_time: NaiveDateTime,
        duration: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date: entry_time.date(),
            entry_time: Some(entry_time),
            duration: Some(duration),
            status: AttendanceStatus::Present,
        }
    }

    /// Creates an absent fact with no check-in.
    pub fn absent(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            entry_time: None,
            duration: None,
            status: AttendanceStatus::Absent,
        }
    }

    /// Hours worked, treating a missing value as zero.
    pub fn duration_or_zero(&self) -> Decimal {
        self.duration.unwrap_or(Decimal::ZERO)
    }
}

/// The compiled attendance outcome for one employee on one date.
///
/// At most one row exists per `(employee_id, date)`; once written it is
/// never replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedDailyAttendance {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The compiled date.
    pub date: NaiveDate,
    /// The resolved status.
    pub status: DailyStatus,
    /// Check-in time of day, only ever set for [`DailyStatus::Present`].
    pub check_in_time: Option<NaiveTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization_is_upper_case() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"PRESENT\""
        );
        assert_eq!(
            serde_json::to_string(&DailyStatus::Holiday).unwrap(),
            "\"HOLIDAY\""
        );
    }

    #[test]
    fn test_daily_status_display_matches_serialization() {
        for status in [
            DailyStatus::Present,
            DailyStatus::Absent,
            DailyStatus::Leave,
            DailyStatus::Holiday,
            DailyStatus::Weekend,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_deserialize_fact_without_duration() {
        let json = r#"{
            "employee_id": "EMP001",
            "date": "2026-03-02",
            "entry_time": "2026-03-02T09:30:00",
            "status": "PRESENT"
        }"#;

        let fact: RawAttendanceFact = serde_json::from_str(json).unwrap();
        assert_eq!(fact.duration, None);
        assert_eq!(fact.duration_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_absent_fact_has_no_entry_time() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let fact = RawAttendanceFact::absent("EMP001", date);
        assert_eq!(fact.entry_time, None);
        assert_eq!(fact.status, AttendanceStatus::Absent);
    }
}
