//! Input validation helpers
//!
//! Centralized text length constants and the payload validation entry point.
//! Limits are chosen based on:
//! - Reasonable UX limits for names, notes, descriptions
//! - RFC 5321 for email addresses
//! - The in-memory store has no built-in length enforcement

use validator::{Validate, ValidationErrors};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: username, first/last name, position, period, titles, etc.
pub const MAX_NAME_LEN: u64 = 200;

/// Notes, descriptions, reasons, comments, goals
pub const MAX_NOTE_LEN: u64 = 500;

/// Short identifiers: phone, employee business code, document type, etc.
pub const MAX_SHORT_TEXT_LEN: u64 = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: u64 = 254;

/// Passwords (stored as-is; hashing is out of scope here)
pub const MAX_PASSWORD_LEN: u64 = 128;

/// Document paths
pub const MAX_PATH_LEN: u64 = 2048;

/// Addresses and emergency contacts
pub const MAX_ADDRESS_LEN: u64 = 500;

/// Long free-form bodies: announcement content, document metadata
pub const MAX_CONTENT_LEN: u64 = 5000;

// ── Payload validation ──────────────────────────────────────────────

/// Validate a payload against its derived constraints.
///
/// Collects every violation into a single field-attributed message
/// (`"email: not a valid email address; username: must not be empty"`)
/// rather than stopping at the first one.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|errors| AppError::validation(format_violations(&errors)))
}

fn format_violations(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut entries: Vec<_> = field_errors.iter().collect();
    // Deterministic field order so the message is stable
    entries.sort_by_key(|(field, _)| field.to_string());

    let mut parts = Vec::new();
    for (field, violations) in entries {
        for violation in violations.iter() {
            let detail = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| violation.code.to_string());
            parts.push(format!("{field}: {detail}"));
        }
    }
    parts.join("; ")
}
