// src/domain/audit_history/value.rs
//! Serialization convention for `old_value` / `new_value`.
//!
//! Values are stored as their JSON encoding, so a text value keeps its quotes
//! (`"abc"` is stored as `"\"abc\""`) and an absent value is `null`.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Serialize, de::DeserializeOwned};

/// # Errors
///
/// Returns [`DomainError::Serialization`] when `value` cannot be represented
/// as JSON, e.g. a map with non-string keys.
pub fn encode_value<T>(value: &T) -> DomainResult<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Decodes a stored value. An empty string means the field was never
/// populated and is reported as a validation error rather than a parse error.
///
/// # Errors
///
/// Returns [`DomainError::Validation`] for an empty string and
/// [`DomainError::Serialization`] when `raw` is not valid JSON for `T`.
pub fn decode_value<T>(raw: &str) -> DomainResult<T>
where
    T: DeserializeOwned,
{
    if raw.is_empty() {
        return Err(DomainError::Validation("stored value is empty".into()));
    }
    Ok(serde_json::from_str(raw)?)
}
