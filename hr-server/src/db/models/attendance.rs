//! Attendance Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};

/// Attendance record — one per check-in event, by convention one per
/// (employee, date). The convention is not enforced.
///
/// `status` is free text ("present", "late", …), not a closed enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: String,
    pub notes: Option<String>,
}

/// Create attendance payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreate {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN, message = "must not be empty"))]
    pub status: String,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub notes: Option<String>,
}

fn default_status() -> String {
    "present".to_string()
}

/// Update attendance payload (e.g. adding the check-out on leave)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    pub employee_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN, message = "must not be empty"))]
    pub status: Option<String>,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub notes: Option<String>,
}
