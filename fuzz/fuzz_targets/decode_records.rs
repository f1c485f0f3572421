#![no_main]

// Harness: decode_records
// Arbitrary input must either fail with an error or decode into a record
// whose derivations are total. Re-encoding a decoded record must decode to
// an equal record.

use libfuzzer_sys::fuzz_target;
use activity_core::codec::{from_json, to_json};
use activity_core::hierarchy::{Activity, Run};
use activity_core::records::{RunSession, Session};

fuzz_target!(|bytes: &[u8]| {
    let Ok(input) = std::str::from_utf8(bytes) else {
        return;
    };

    if let Ok(run) = from_json::<RunSession>(input) {
        let _ = Activity::duration(&run);
        let _ = run.track().len();
        let re = to_json(&run).expect("encoding a decoded record cannot fail");
        let back: RunSession = from_json(&re).expect("re-encoded record must decode");
        assert_eq!(back, run);
    }

    if let Ok(session) = from_json::<Session>(input) {
        let _ = session.duration();
    }
});
