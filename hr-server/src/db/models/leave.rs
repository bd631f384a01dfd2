//! Leave Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::MAX_NOTE_LEN;

/// Leave type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    Unpaid,
    Maternity,
    Paternity,
    Bereavement,
    Other,
}

/// Leave status
///
/// Transitions are not constrained: the status endpoint accepts any of
/// the three values regardless of the current one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for LeaveStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Leave request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    /// User id of the approver, set (or cleared) by the status endpoint
    pub approved_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create leave payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCreate {
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: LeaveStatus,
    pub approved_by: Option<i64>,
}

/// Status transition payload for `PUT /api/leaves/{id}/status`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatusUpdate {
    pub status: LeaveStatus,
    pub approved_by: Option<i64>,
}
