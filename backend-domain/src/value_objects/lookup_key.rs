// Lookup key value object
//
// Callers may send tag/reader identifiers as JSON strings or numbers. Both are
// normalized to the same string form before they are compared with stored
// records, so `42` and `"42"` resolve to the same Tag.

use std::fmt;

use serde_json::{Number, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupKeyError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a string or a number")]
    Unsupported(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(String);

impl LookupKey {
    pub fn from_value(field: &'static str, value: &Value) -> Result<Self, LookupKeyError> {
        match value {
            Value::Null => Err(LookupKeyError::Missing(field)),
            Value::String(raw) => Self::from_text(field, raw),
            Value::Number(number) => Ok(Self(number_key(number))),
            _ => Err(LookupKeyError::Unsupported(field)),
        }
    }

    pub fn from_text(field: &'static str, raw: &str) -> Result<Self, LookupKeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupKeyError::Empty(field));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Whole floats such as `1001.0` collapse to `1001`; `-0.0` becomes `0`.
fn number_key(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value == 0.0 => "0".to_string(),
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            (value as i64).to_string()
        }
        // f64 Display prints the shortest form that round-trips.
        Some(value) => value.to_string(),
        None => number.to_string(),
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
