#![no_main]

// Harness: duration_parity
// Every route to a duration (inherited method, free capability function,
// call-site declaration, attached duration) must agree and never panic.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use activity_core::capability::{self, Declared, Span};
use activity_core::hierarchy::{Activity, Run, Sport};
use activity_core::primitives::Location;
use activity_core::records::{RunSession, Session, SwimSession};
use activity_core::types::SportKind;

#[derive(Arbitrary, Debug, Clone)]
struct FuzzRecordInput {
    start: i64,
    stop: i64,
    distance: i64,
    track: Vec<(i32, i32)>,
}

fuzz_target!(|data: FuzzRecordInput| {
    let expected = data.stop.wrapping_sub(data.start);

    let session = Session::new(data.start, data.stop);
    assert_eq!(session.duration(), expected);
    assert_eq!(capability::duration(&Declared(&session)), expected);
    assert_eq!(capability::duration(&Span::new(data.start, data.stop)), expected);

    let track: Vec<Location> = data.track.iter().copied().map(Location::from).collect();
    let run = RunSession::new(data.start, data.stop, data.distance, track.clone());
    assert_eq!(Activity::duration(&run), expected);
    assert_eq!(capability::duration(&run), expected);
    assert_eq!(run.kind(), SportKind::Run);
    assert_eq!(run.distance(), data.distance);
    assert_eq!(run.track(), track.as_slice());

    let swim = SwimSession::new(data.start, data.stop, data.distance);
    assert_eq!(capability::with_duration(swim).duration(), expected);
});
