//! Capability-based alternative to the activity hierarchy.
//!
//! `ActivityCapability` names the operation set `{start, stop}` and the free
//! function [`duration`] works over anything that has it. Conformance is
//! nominal: a type counts only once it declares `impl ActivityCapability`.
//! Implementing [`crate::hierarchy::Activity`] is not enough, and there is no
//! blanket impl bridging the two, so the hierarchy and the capability stay
//! two parallel routes to the same number.
//!
//! A hierarchy value can still opt in at the call site through [`Declared`].

pub mod timed;

pub use timed::{with_duration, Timed};

use crate::hierarchy::Activity;
use crate::types::Timestamp;

/// The `{start, stop}` operation set.
pub trait ActivityCapability {
    fn start(&self) -> Timestamp;

    fn stop(&self) -> Timestamp;
}

impl<C: ActivityCapability + ?Sized> ActivityCapability for &C {
    fn start(&self) -> Timestamp {
        (**self).start()
    }

    fn stop(&self) -> Timestamp {
        (**self).stop()
    }
}

/// `x.stop() - x.start()`, wrapping on overflow.
///
/// Only types that declare the capability are accepted:
///
/// ```
/// use activity_core::capability::{self, Span};
///
/// assert_eq!(capability::duration(&Span::new(1, 3)), 2);
/// ```
///
/// A hierarchy record with matching `start`/`stop` methods is rejected at
/// compile time:
///
/// ```compile_fail
/// use activity_core::capability;
/// use activity_core::records::Session;
///
/// let session = Session::new(1, 3);
/// capability::duration(&session);
/// ```
///
/// unless it opts in explicitly:
///
/// ```
/// use activity_core::capability::{self, Declared};
/// use activity_core::records::Session;
///
/// let session = Session::new(1, 3);
/// assert_eq!(capability::duration(&Declared(&session)), 2);
/// ```
pub fn duration<C: ActivityCapability + ?Sized>(x: &C) -> Timestamp {
    x.stop().wrapping_sub(x.start())
}

/// An interval that only declares the capability. It is not an `Activity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Span {
    start: Timestamp,
    stop: Timestamp,
}

impl Span {
    pub fn new(start: Timestamp, stop: Timestamp) -> Self {
        tracing::trace!(start, stop, "new Span");
        Span { start, stop }
    }
}

impl ActivityCapability for Span {
    fn start(&self) -> Timestamp {
        self.start
    }

    fn stop(&self) -> Timestamp {
        self.stop
    }
}

/// Call-site declaration that an `Activity` also has the capability.
///
/// Wrapping is the explicit opt-in; nothing converts implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declared<A>(pub A);

impl<A: Activity> ActivityCapability for Declared<A> {
    fn start(&self) -> Timestamp {
        Activity::start(&self.0)
    }

    fn stop(&self) -> Timestamp {
        Activity::stop(&self.0)
    }
}
