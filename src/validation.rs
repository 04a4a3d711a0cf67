//! Field validators
//!
//! Stateless acceptance rules applied to raw field strings before they reach
//! a record. Each returns the coerced value or a `Validation` error whose
//! message names the offending input.

use chrono::NaiveDate;

use crate::error::{AssistantError, AssistantResult};
use crate::models::dates::DATE_FORMAT;
use crate::models::{FieldRejection, Priority};

/// Require text that is non-empty after trimming; returns the trimmed text
pub fn non_empty_text(field: &str, value: &str) -> AssistantResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AssistantError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Parse one of the accepted priority tokens
pub fn parse_priority(value: &str) -> AssistantResult<Priority> {
    value.parse::<Priority>().map_err(|_| {
        AssistantError::Validation(format!(
            "Invalid priority '{}'. Valid priorities: High, Medium, Low",
            value.trim()
        ))
    })
}

/// Create-time priority policy: unknown tokens fall back to `Medium`
///
/// The fallback is reported so the caller can tell the user about it.
pub fn priority_or_default(value: &str) -> (Priority, Option<FieldRejection>) {
    match parse_priority(value) {
        Ok(priority) => (priority, None),
        Err(e) => {
            let warning = FieldRejection::new(
                "priority",
                format!("{}; using {}", e.detail(), Priority::default()),
            );
            (Priority::default(), Some(warning))
        }
    }
}

/// Parse a `DD-MM-YYYY` calendar date with a four-digit year
pub fn parse_date(value: &str) -> AssistantResult<NaiveDate> {
    let trimmed = value.trim();
    let invalid = || {
        AssistantError::Validation(format!(
            "Invalid date '{}'. Use DD-MM-YYYY (e.g., '31-01-2024')",
            trimmed
        ))
    };

    let year = trimmed.rsplit('-').next().unwrap_or_default();
    if trimmed.split('-').count() != 3
        || year.len() != 4
        || !year.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

/// Parse a signed decimal amount
pub fn parse_amount(value: &str) -> AssistantResult<f64> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(AssistantError::Validation(format!(
            "Invalid amount '{}'. Use a number such as 120.50 or -40",
            trimmed
        ))),
    }
}
