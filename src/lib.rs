#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Activity-Core models recorded physical activities (runs, swims) and the
//! metrics derived from them.
//!
//! Two ways of sharing the `duration` derivation live side by side:
//! - `hierarchy`: nominal traits `Activity` <- `Sport` <- `Run`, with
//!   `duration` written once on `Activity` and inherited;
//! - `capability`: the `ActivityCapability` operation set plus a free
//!   `duration` function over it.
//!
//! The two do not unify. A type gets the capability only by declaring it.

// Shared scalar types and `SportKind`.
pub mod types;

// Core primitive data structures (Location).
pub mod primitives;

pub use primitives::*;

pub mod hierarchy;

pub mod capability;

// Concrete records: Session, RunSession, SwimSession.
pub mod records;

pub mod codec;

pub mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use capability::{ActivityCapability, Declared, Span, Timed};
pub use error::ActivityError;
pub use hierarchy::{Activity, Run, Sport};
pub use records::{RunSession, Session, SwimSession};
pub use types::{Distance, SportKind, Timestamp};
