//! Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN};

/// Calendar event. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

/// Create event payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventCreate {
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub title: String,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(length(max = MAX_NAME_LEN, message = "is too long"))]
    pub location: Option<String>,
    pub created_by: i64,
}
