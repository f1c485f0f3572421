//! Shared scalar types and the sport classification.
//!
//! Timestamps are opaque ordered scalars: no calendar, no time zone, no unit.
//! Distances are plain integers in whatever unit the producer chose.

use std::fmt;
use std::str::FromStr;

use crate::error::ActivityError;

/// Opaque, ordered point in time. Also the type of a duration.
pub type Timestamp = i64;

/// Distance covered by a sport, unit-less.
pub type Distance = i64;

/// Coordinate component of a [`crate::primitives::Location`].
pub type Coordinate = i32;

/// Classification of a sport.
/// The value is fixed per concrete record type, never per instance.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportKind {
    Run = 0,
    Swim = 1,
}

impl SportKind {
    /// Lowercase name, as used in JSON and `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SportKind::Run => "run",
            SportKind::Swim => "swim",
        }
    }
}

impl TryFrom<u8> for SportKind {
    type Error = ActivityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SportKind::Run),
            1 => Ok(SportKind::Swim),
            _ => Err(ActivityError::UnknownKindTag(value)),
        }
    }
}

impl From<SportKind> for u8 {
    fn from(kind: SportKind) -> Self {
        kind as u8
    }
}

impl fmt::Display for SportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportKind {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "run" => Ok(SportKind::Run),
            "swim" => Ok(SportKind::Swim),
            _ => Err(ActivityError::UnknownKindName(s.to_string())),
        }
    }
}
