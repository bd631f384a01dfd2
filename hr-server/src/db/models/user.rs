//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN};

/// User account
///
/// `role` is free text ("employee", "hr", "admin", …), not a closed enum —
/// any value is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, max = MAX_PASSWORD_LEN, message = "must not be empty"))]
    pub password: String,
    #[validate(email(message = "is not a valid email address"), length(max = MAX_EMAIL_LEN))]
    pub email: String,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub last_name: String,
    #[serde(default = "default_role")]
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub role: String,
}

fn default_role() -> String {
    "employee".to_string()
}

/// Update user payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub username: Option<String>,
    #[validate(length(min = 1, max = MAX_PASSWORD_LEN, message = "must not be empty"))]
    pub password: Option<String>,
    #[validate(email(message = "is not a valid email address"), length(max = MAX_EMAIL_LEN))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub role: Option<String>,
}
