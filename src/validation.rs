//! Input validation for values typed at the console.
//!
//! Every form field is run through one of these functions before it is bound into
//! a statement, so malformed emails, phone numbers or dates never reach MySQL.

use crate::error::ValidationError;
use chrono::NaiveDate;
use regex::Regex;
use sqlx::types::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Width of the `email` columns.
const MAX_EMAIL_LEN: usize = 100;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid regex"));

/// Validates free text, returning the trimmed value.
pub fn validate_text(field: &str, raw: &str, max_len: usize) -> ValidationResult<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    if text.chars().count() > max_len {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: max_len,
        });
    }
    Ok(text.to_string())
}

/// Validates a password exactly as typed. Surrounding whitespace is part of the secret.
pub fn validate_password(field: &str, raw: &str, max_len: usize) -> ValidationResult<String> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    if raw.chars().count() > max_len {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: max_len,
        });
    }
    Ok(raw.to_string())
}

/// Validates an email address against the usual `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> ValidationResult<String> {
    let email = raw.trim();
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "Email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }
    if EMAIL_RE.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validates a phone number: exactly ten digits, no separators.
pub fn validate_phone(raw: &str) -> ValidationResult<String> {
    let phone = raw.trim();
    if PHONE_RE.is_match(phone) {
        Ok(phone.to_string())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> ValidationResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Parses a surrogate key or other positive integer.
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();
    let id = raw
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })?;
    if id <= 0 {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
        });
    }
    Ok(id)
}

/// Parses a non-negative decimal (amounts, weights, dimensions).
pub fn parse_decimal(field: &str, raw: &str) -> ValidationResult<Decimal> {
    let raw = raw.trim();
    let value = Decimal::from_str(raw).map_err(|_| ValidationError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Matches input against a fixed set of options, ignoring case.
///
/// Returns the canonical spelling from `allowed`.
pub fn validate_choice(field: &str, raw: &str, allowed: &[&str]) -> ValidationResult<String> {
    let raw = raw.trim();
    allowed
        .iter()
        .find(|option| option.eq_ignore_ascii_case(raw))
        .map(|option| option.to_string())
        .ok_or_else(|| ValidationError::InvalidChoice {
            field: field.to_string(),
            value: raw.to_string(),
            allowed: allowed.join(", "),
        })
}

/// Parses a comma-separated list of IDs such as `"3, 7,12"`.
///
/// Duplicates are dropped, first occurrence wins.
pub fn parse_id_list(field: &str, raw: &str) -> ValidationResult<Vec<i64>> {
    let mut ids = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let id = parse_id(field, part)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    if ids.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(ids)
}
