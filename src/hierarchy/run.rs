//! Runs: sports with a recorded path.

use crate::hierarchy::{Running, Sport};
use crate::primitives::Location;

/// A `Sport` whose kind is always `SportKind::Run`.
///
/// The `Kind = Running` bound fixes the classification for every
/// implementor. `distance` remains the record's own value; it is not derived
/// from `track`.
pub trait Run: Sport<Kind = Running> {
    /// The recorded path, in recording order. May be empty.
    fn track(&self) -> &[Location];
}
