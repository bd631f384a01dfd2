//! Announcement Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{MAX_CONTENT_LEN, MAX_NAME_LEN};

/// Company announcement. Immutable once posted; there is no update or
/// delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub created_by: i64,
    pub title: String,
    pub content: String,
    pub post_date: DateTime<Utc>,
}

/// Create announcement payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementCreate {
    pub created_by: i64,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, max = MAX_CONTENT_LEN, message = "must not be empty"))]
    pub content: String,
}
