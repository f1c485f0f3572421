//!
//! Defines error types for activity-core.
//!
//! The data model itself never fails: every accessor and derivation is total.
//! Errors only arise at the edges, when a sport kind or a record is decoded
//! from outside input.

/// Errors raised while decoding sport kinds or records.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    /// The numeric tag does not name a known `SportKind`.
    #[error("Unknown sport kind tag: {0}")]
    UnknownKindTag(u8),
    /// The text does not name a known `SportKind`.
    #[error("Unknown sport kind name: {0:?}")]
    UnknownKindName(String),
    /// A decoded sport record names a different kind than its type.
    #[error("Sport kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: crate::types::SportKind,
        found: crate::types::SportKind,
    },
    /// JSON encoding or decoding failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, ActivityError>;
