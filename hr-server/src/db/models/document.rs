//! Document Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{
    MAX_CONTENT_LEN, MAX_NAME_LEN, MAX_PATH_LEN, MAX_SHORT_TEXT_LEN,
};

/// Employee document. Immutable once uploaded; only creation and deletion
/// are supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub employee_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub path: String,
    /// Additional document information as an opaque JSON string
    pub metadata: Option<String>,
    pub upload_date: DateTime<Utc>,
}

/// Create document payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCreate {
    pub employee_id: i64,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN, message = "must not be empty"))]
    pub doc_type: String,
    #[validate(length(min = 1, max = MAX_PATH_LEN, message = "must not be empty"))]
    pub path: String,
    #[validate(length(max = MAX_CONTENT_LEN, message = "is too long"))]
    pub metadata: Option<String>,
}
