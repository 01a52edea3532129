use crate::utils::error::{ConvError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Data-type tokens are lowercase words, optionally the `*` wildcard,
/// as they appear in converter keys like `"text json"` or `"* text"`.
fn type_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\*|[a-z][a-z0-9+]*)$").unwrap())
}

pub fn validate_type_token(field_name: &str, token: &str) -> Result<()> {
    if !type_token_pattern().is_match(token) {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: token.to_string(),
            reason: "Type tokens must be lowercase alphanumeric words or '*'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_chain(field_name: &str, types: &[String]) -> Result<()> {
    if types.len() < 2 {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: types.join(","),
            reason: "A conversion chain needs at least a source and a target type".to_string(),
        });
    }

    for token in types {
        validate_type_token(field_name, token)?;
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ConvError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
