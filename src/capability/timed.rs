//! Attaching a computed duration to a capability-conforming value.

use serde::{Deserialize, Deserializer};

use super::{duration, ActivityCapability};
use crate::types::Timestamp;

/// A value paired with the duration computed from it.
///
/// Serializes flat: the wrapped value's fields plus `"duration"`. Decoding
/// reads only the value; any `"duration"` in the input is ignored and
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Timed<T> {
    #[serde(flatten)]
    value: T,
    duration: Timestamp,
}

impl<T> Timed<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn duration(&self) -> Timestamp {
        self.duration
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<'de, T> Deserialize<'de> for Timed<T>
where
    T: Deserialize<'de> + ActivityCapability,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(with_duration)
    }
}

/// Computes the duration of `value` once and keeps it next to the value.
pub fn with_duration<T: ActivityCapability>(value: T) -> Timed<T> {
    let duration = duration(&value);
    Timed { value, duration }
}
