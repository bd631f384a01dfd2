//! Activity Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::MAX_NOTE_LEN;

/// Activity type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    LeaveRequest,
    DocumentUpdate,
    Training,
    PerformanceReview,
    Onboarding,
    Other,
}

/// Activity status
///
/// Like leave status, transitions are not constrained by the update
/// endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl Default for ActivityStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Activity feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub employee_id: i64,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub description: String,
    /// Server-set at creation; never changed afterwards
    pub date: DateTime<Utc>,
    pub status: ActivityStatus,
}

/// Create activity payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCreate {
    pub employee_id: i64,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[validate(length(min = 1, max = MAX_NOTE_LEN, message = "must not be empty"))]
    pub description: String,
    #[serde(default)]
    pub status: ActivityStatus,
}

/// Status transition payload for `PUT /api/activities/{id}/status`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStatusUpdate {
    pub status: ActivityStatus,
}
