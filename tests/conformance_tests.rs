#![cfg(test)]

use activity_core::capability::{self, ActivityCapability, Declared, Span, Timed};
use activity_core::error::ActivityError;
use activity_core::codec::{from_json, to_json};
use activity_core::hierarchy::{Activity, Run, Sport};
use activity_core::primitives::Location;
use activity_core::records::{RunSession, Session, SwimSession};
use activity_core::types::{SportKind, Timestamp};

// --- Ad hoc implementors, the way a downstream crate would write them ---

#[derive(Debug)]
struct Stopwatch {
    started: Timestamp,
    elapsed: Timestamp,
}

impl Activity for Stopwatch {
    fn start(&self) -> Timestamp {
        self.started
    }

    // Computed rather than stored.
    fn stop(&self) -> Timestamp {
        self.started + self.elapsed
    }
}

#[derive(Debug)]
struct Window(Timestamp, Timestamp);

impl ActivityCapability for Window {
    fn start(&self) -> Timestamp {
        self.0
    }

    fn stop(&self) -> Timestamp {
        self.1
    }
}

#[test]
fn test_run_end_to_end() {
    let run = RunSession::new(1, 3, 4, vec![Location::new(1, 2)]);
    assert_eq!(run.duration(), 2);
    assert_eq!(run.distance(), 4);
    assert_eq!(run.kind(), SportKind::Run);
    assert_eq!(run.track().len(), 1);
    assert_eq!(run.track()[0], Location::new(1, 2));
}

#[test]
fn test_capability_end_to_end() {
    assert_eq!(capability::duration(&Span::new(1, 3)), 2);
    assert_eq!(capability::duration(&Window(1, 3)), 2);
}

#[test]
fn test_plain_activity_end_to_end() {
    assert_eq!(Session::new(1, 3).duration(), 2);
    assert_eq!(Session::new(3, 1).duration(), -2);
}

#[test]
fn test_empty_track() {
    let run = RunSession::new(1, 3, 4, Vec::new());
    assert!(run.track().is_empty());
    assert_eq!(run.kind(), SportKind::Run);
}

#[test]
fn test_track_insertion_order() {
    let run = RunSession::new(1, 3, 4, vec![Location::new(3, 4), Location::new(1, 2)]);
    assert_eq!(run.track(), &[Location::new(3, 4), Location::new(1, 2)]);
}

#[test]
fn test_distance_independent_of_track() {
    let run = RunSession::new(0, 10, 0, vec![Location::new(0, 0), Location::new(90, 90)]);
    assert_eq!(run.distance(), 0);
    let run = RunSession::new(0, 10, 42_195, Vec::new());
    assert_eq!(run.distance(), 42_195);
}

#[test]
fn test_swim_kind() {
    let swim = SwimSession::new(0, 60, 1500);
    assert_eq!(swim.kind(), SportKind::Swim);
    assert_eq!(swim.duration(), 60);
}

#[test]
fn test_computed_accessors_inherit_duration() {
    let watch = Stopwatch { started: 100, elapsed: 25 };
    assert_eq!(watch.duration(), 25);
    // Not a capability until declared.
    assert_eq!(capability::duration(&Declared(&watch)), 25);
}

#[test]
fn test_mixed_sports_through_dyn() {
    let run = RunSession::new(0, 30, 5000, Vec::new());
    let swim = SwimSession::new(40, 70, 1000);
    let sports: [&dyn Activity; 2] = [&run, &swim];
    let total: Timestamp = sports.iter().map(|a| a.duration()).sum();
    assert_eq!(total, 60);
}

#[test]
fn test_timed_json_shape() {
    let timed = capability::with_duration(Span::new(1, 3));
    assert_eq!(to_json(&timed).unwrap(), r#"{"start":1,"stop":3,"duration":2}"#);
}

#[test]
fn test_sport_json_kinds_do_not_cross() {
    let swim_json = to_json(&SwimSession::new(0, 90, 2000)).unwrap();
    assert_eq!(swim_json, r#"{"kind":"swim","start":0,"stop":90,"distance":2000}"#);
    assert!(matches!(from_json::<RunSession>(&swim_json), Err(ActivityError::Json(_))));

    let run_json = to_json(&RunSession::new(0, 90, 2000, Vec::new())).unwrap();
    assert!(matches!(from_json::<SwimSession>(&run_json), Err(ActivityError::Json(_))));

    let swim: SwimSession = from_json(&swim_json).unwrap();
    assert_eq!(swim.kind(), SportKind::Swim);
}

#[test]
fn test_timed_json_recomputes_duration() {
    let timed: Timed<Span> = from_json(r#"{"start":1,"stop":3,"duration":99}"#).unwrap();
    assert_eq!(timed.duration(), 2);
    assert_eq!(timed.duration(), capability::duration(timed.value()));
}

#[test]
fn test_run_json_round_trip_keeps_semantics() {
    let json = r#"{"kind":"run","start":1,"stop":3,"distance":4,"track":[{"lat":1,"lon":2}]}"#;
    let run: RunSession = from_json(json).unwrap();
    assert_eq!(run.duration(), 2);
    assert_eq!(run.distance(), 4);
    assert_eq!(run.track(), &[Location::new(1, 2)]);
    assert_eq!(to_json(&run).unwrap(), json);
}
