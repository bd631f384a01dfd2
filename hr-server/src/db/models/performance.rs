//! Performance Review Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN};

/// Performance review, one per employee per review cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub id: i64,
    pub employee_id: i64,
    /// Reviewing user (not employee) id
    pub reviewer_id: i64,
    pub period: String,
    pub rating: Option<Decimal>,
    pub comments: Option<String>,
    pub goals: Option<String>,
    pub review_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create performance payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCreate {
    pub employee_id: i64,
    pub reviewer_id: i64,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub period: String,
    pub rating: Option<Decimal>,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub comments: Option<String>,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub goals: Option<String>,
    pub review_date: NaiveDate,
}

/// Update performance payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceUpdate {
    pub employee_id: Option<i64>,
    pub reviewer_id: Option<i64>,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub period: Option<String>,
    pub rating: Option<Decimal>,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub comments: Option<String>,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub goals: Option<String>,
    pub review_date: Option<NaiveDate>,
}
