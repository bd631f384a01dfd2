//! Employee Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
};

/// Department
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    Hr,
    Finance,
    Operations,
    Other,
}

/// Employment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

/// Employee record
///
/// Linked to its owning [`super::User`] through `user_id`; `manager` is a
/// self-reference to another employee's id. Neither reference is checked
/// against the referenced table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub user_id: i64,
    /// Business code ("EMP-100"), distinct from the synthetic `id`
    pub employee_id: String,
    pub date_of_birth: Option<NaiveDate>,
    pub hire_date: NaiveDate,
    pub department: Department,
    pub position: String,
    pub employment_type: EmploymentType,
    pub manager: Option<i64>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub salary: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub user_id: i64,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN, message = "must not be empty"))]
    pub employee_id: String,
    pub date_of_birth: Option<NaiveDate>,
    pub hire_date: NaiveDate,
    pub department: Department,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub position: String,
    pub employment_type: EmploymentType,
    pub manager: Option<i64>,
    #[validate(length(max = MAX_SHORT_TEXT_LEN, message = "is too long"))]
    pub phone: Option<String>,
    #[validate(length(max = MAX_ADDRESS_LEN, message = "is too long"))]
    pub address: Option<String>,
    #[validate(length(max = MAX_ADDRESS_LEN, message = "is too long"))]
    pub emergency_contact: Option<String>,
    pub salary: Option<Decimal>,
}

/// Update employee payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub user_id: Option<i64>,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN, message = "must not be empty"))]
    pub employee_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub department: Option<Department>,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub position: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub manager: Option<i64>,
    #[validate(length(max = MAX_SHORT_TEXT_LEN, message = "is too long"))]
    pub phone: Option<String>,
    #[validate(length(max = MAX_ADDRESS_LEN, message = "is too long"))]
    pub address: Option<String>,
    #[validate(length(max = MAX_ADDRESS_LEN, message = "is too long"))]
    pub emergency_contact: Option<String>,
    pub salary: Option<Decimal>,
}
