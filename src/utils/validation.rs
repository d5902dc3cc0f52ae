use crate::utils::error::{RomanError, Result};
use std::num::IntErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(RomanError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RomanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Reads a user-typed integer. Surrounding whitespace is ignored. Integers
/// that overflow `i64` are `NumberOutOfRange`; any other text is a
/// `MalformedInput`.
pub fn parse_integer(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => RomanError::NumberOutOfRange {
            input: trimmed.to_string(),
        },
        _ => RomanError::MalformedInput {
            expected: "an integer".to_string(),
            input: trimmed.to_string(),
        },
    })
}

pub fn is_numeral_alphabet(input: &str) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|c| matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
}
