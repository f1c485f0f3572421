//! `proptest` strategies for records, behind the `test-utils` feature.

use proptest::prelude::*;

use crate::capability::Span;
use crate::primitives::Location;
use crate::records::{RunSession, Session, SwimSession};

pub fn arb_location() -> impl Strategy<Value = Location> {
    (any::<i32>(), any::<i32>()).prop_map(|(lat, lon)| Location::new(lat, lon))
}

/// Tracks of 0 to 32 points, in generated order.
pub fn arb_track() -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec(arb_location(), 0..32)
}

pub fn arb_session() -> impl Strategy<Value = Session> {
    (any::<i64>(), any::<i64>()).prop_map(|(start, stop)| Session::new(start, stop))
}

pub fn arb_span() -> impl Strategy<Value = Span> {
    (any::<i64>(), any::<i64>()).prop_map(|(start, stop)| Span::new(start, stop))
}

pub fn arb_run_session() -> impl Strategy<Value = RunSession> {
    (any::<i64>(), any::<i64>(), any::<i64>(), arb_track())
        .prop_map(|(start, stop, distance, track)| RunSession::new(start, stop, distance, track))
}

pub fn arb_swim_session() -> impl Strategy<Value = SwimSession> {
    (any::<i64>(), any::<i64>(), any::<i64>())
        .prop_map(|(start, stop, distance)| SwimSession::new(start, stop, distance))
}
