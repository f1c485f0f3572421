//! Root of the activity hierarchy.

use crate::types::Timestamp;

/// Anything recorded as a start/stop interval.
///
/// Implementors supply `start` and `stop`; `duration` is inherited. The
/// hierarchy does not check `stop >= start`, so a duration may be negative.
pub trait Activity {
    fn start(&self) -> Timestamp;

    fn stop(&self) -> Timestamp;

    /// `stop - start`, computed on every call.
    ///
    /// Wraps on `i64` overflow instead of panicking, so the derivation is
    /// total for every pair of timestamps.
    fn duration(&self) -> Timestamp {
        self.stop().wrapping_sub(self.start())
    }
}

impl<A: Activity + ?Sized> Activity for &A {
    fn start(&self) -> Timestamp {
        (**self).start()
    }

    fn stop(&self) -> Timestamp {
        (**self).stop()
    }
}

impl<A: Activity + ?Sized> Activity for Box<A> {
    fn start(&self) -> Timestamp {
        (**self).start()
    }

    fn stop(&self) -> Timestamp {
        (**self).stop()
    }
}
