use crate::utils::error::{LessonError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every name must be one of `known`. Reports the first stranger.
pub fn validate_known_names(names: &[String], known: &[&str]) -> Result<()> {
    let known_set: HashSet<&str> = known.iter().copied().collect();

    for name in names {
        validate_non_empty_string("lesson name", name)?;
        if !known_set.contains(name.as_str()) {
            return Err(LessonError::UnknownLesson { name: name.clone() });
        }
    }

    Ok(())
}
