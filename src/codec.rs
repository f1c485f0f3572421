//! JSON encoding of records.
//!
//! Decoding checks field types only. An interval whose stop precedes its
//! start decodes like any other.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    let value = serde_json::from_str(input).inspect_err(|e| {
        tracing::debug!(error = %e, len = input.len(), "failed to decode record");
    })?;
    Ok(value)
}
