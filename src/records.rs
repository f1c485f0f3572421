//! Concrete activity records.
//!
//! Each record is built once with its complete field set and never mutated.
//! `Session` sits only in the nominal hierarchy. `RunSession` and
//! `SwimSession` also declare `ActivityCapability`, so both ways of computing
//! a duration apply to them.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::capability::ActivityCapability;
use crate::error::ActivityError;
use crate::hierarchy::{Activity, KindTag, Run, Running, Sport, Swimming};
use crate::primitives::Location;
use crate::types::{Distance, SportKind, Timestamp};

fn trace_interval(record: &'static str, start: Timestamp, stop: Timestamp) {
    if stop < start {
        tracing::debug!(record, start, stop, "stop precedes start; accepted unvalidated");
    }
}

/// Decoded `kind` must be the one fixed by the record type `S`.
fn check_kind<S: Sport>(found: SportKind) -> Result<(), ActivityError> {
    let expected = <S::Kind as KindTag>::KIND;
    if found != expected {
        tracing::debug!(%expected, %found, "sport kind mismatch");
        return Err(ActivityError::KindMismatch { expected, found });
    }
    Ok(())
}

// --- Session ----------------------------------------------------------------

/// A plain activity: just an interval.
///
/// Deliberately does not implement `ActivityCapability`; wrap it in
/// [`crate::capability::Declared`] to use the capability functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Session {
    start: Timestamp,
    stop: Timestamp,
}

impl Session {
    pub fn new(start: Timestamp, stop: Timestamp) -> Self {
        tracing::trace!(start, stop, "new Session");
        trace_interval("Session", start, stop);
        Session { start, stop }
    }
}

impl Activity for Session {
    fn start(&self) -> Timestamp {
        self.start
    }

    fn stop(&self) -> Timestamp {
        self.stop
    }
}

// --- RunSession -------------------------------------------------------------

/// A recorded run.
///
/// JSON carries the derived `"kind": "run"`. Decoding requires it, so a swim
/// payload is never read as a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "RunSessionJson")]
pub struct RunSession {
    start: Timestamp,
    stop: Timestamp,
    distance: Distance,
    track: Vec<Location>,
}

#[derive(serde::Deserialize)]
struct RunSessionJson {
    kind: SportKind,
    start: Timestamp,
    stop: Timestamp,
    distance: Distance,
    #[serde(default)]
    track: Vec<Location>,
}

impl TryFrom<RunSessionJson> for RunSession {
    type Error = ActivityError;

    fn try_from(json: RunSessionJson) -> Result<Self, Self::Error> {
        check_kind::<RunSession>(json.kind)?;
        Ok(RunSession::new(json.start, json.stop, json.distance, json.track))
    }
}

impl Serialize for RunSession {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RunSession", 5)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("stop", &self.stop)?;
        state.serialize_field("distance", &self.distance)?;
        state.serialize_field("track", &self.track)?;
        state.end()
    }
}

impl RunSession {
    /// `track` is kept in the given order. `distance` is taken as-is and is
    /// not checked against the track.
    pub fn new(
        start: Timestamp,
        stop: Timestamp,
        distance: Distance,
        track: impl IntoIterator<Item = Location>,
    ) -> Self {
        let track: Vec<Location> = track.into_iter().collect();
        tracing::trace!(start, stop, distance, points = track.len(), "new RunSession");
        trace_interval("RunSession", start, stop);
        RunSession { start, stop, distance, track }
    }
}

impl Activity for RunSession {
    fn start(&self) -> Timestamp {
        self.start
    }

    fn stop(&self) -> Timestamp {
        self.stop
    }
}

impl Sport for RunSession {
    type Kind = Running;

    fn distance(&self) -> Distance {
        self.distance
    }
}

impl Run for RunSession {
    fn track(&self) -> &[Location] {
        &self.track
    }
}

impl ActivityCapability for RunSession {
    fn start(&self) -> Timestamp {
        self.start
    }

    fn stop(&self) -> Timestamp {
        self.stop
    }
}

// --- SwimSession ------------------------------------------------------------

/// A recorded swim. JSON carries `"kind": "swim"`, checked on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "SwimSessionJson")]
pub struct SwimSession {
    start: Timestamp,
    stop: Timestamp,
    distance: Distance,
}

#[derive(serde::Deserialize)]
struct SwimSessionJson {
    kind: SportKind,
    start: Timestamp,
    stop: Timestamp,
    distance: Distance,
}

impl TryFrom<SwimSessionJson> for SwimSession {
    type Error = ActivityError;

    fn try_from(json: SwimSessionJson) -> Result<Self, Self::Error> {
        check_kind::<SwimSession>(json.kind)?;
        Ok(SwimSession::new(json.start, json.stop, json.distance))
    }
}

impl Serialize for SwimSession {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SwimSession", 4)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("stop", &self.stop)?;
        state.serialize_field("distance", &self.distance)?;
        state.end()
    }
}

impl SwimSession {
    pub fn new(start: Timestamp, stop: Timestamp, distance: Distance) -> Self {
        tracing::trace!(start, stop, distance, "new SwimSession");
        trace_interval("SwimSession", start, stop);
        SwimSession { start, stop, distance }
    }
}

impl Activity for SwimSession {
    fn start(&self) -> Timestamp {
        self.start
    }

    fn stop(&self) -> Timestamp {
        self.stop
    }
}

impl Sport for SwimSession {
    type Kind = Swimming;

    fn distance(&self) -> Distance {
        self.distance
    }
}

impl ActivityCapability for SwimSession {
    fn start(&self) -> Timestamp {
        self.start
    }

    fn stop(&self) -> Timestamp {
        self.stop
    }
}
