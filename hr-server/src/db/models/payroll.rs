//! Payroll Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};

/// Payroll record, one per employee per pay cycle.
///
/// `status` is free text ("pending", "paid", …). `net_salary` is supplied
/// by the caller, not derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    /// Pay period label, e.g. "2024-05"
    pub period: String,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
    pub payment_date: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
}

/// Create payroll payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCreate {
    pub employee_id: i64,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub period: String,
    pub base_salary: Decimal,
    #[serde(default)]
    pub bonus: Decimal,
    #[serde(default)]
    pub deductions: Decimal,
    pub net_salary: Decimal,
    pub payment_date: NaiveDate,
    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN, message = "must not be empty"))]
    pub status: String,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub notes: Option<String>,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Update payroll payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayrollUpdate {
    pub employee_id: Option<i64>,
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "must not be empty"))]
    pub period: Option<String>,
    pub base_salary: Option<Decimal>,
    pub bonus: Option<Decimal>,
    pub deductions: Option<Decimal>,
    pub net_salary: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN, message = "must not be empty"))]
    pub status: Option<String>,
    #[validate(length(max = MAX_NOTE_LEN, message = "is too long"))]
    pub notes: Option<String>,
}
