//! Activities that cover a distance and have a fixed classification.

use crate::hierarchy::Activity;
use crate::types::{Distance, SportKind};

/// Type-level carrier of a `SportKind`.
///
/// A concrete sport picks its classification by naming one of these tags as
/// `Sport::Kind`, which makes the kind a property of the type rather than of
/// any instance.
pub trait KindTag {
    const KIND: SportKind;
}

/// Tag for `SportKind::Run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Running {}

/// Tag for `SportKind::Swim`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swimming {}

impl KindTag for Running {
    const KIND: SportKind = SportKind::Run;
}

impl KindTag for Swimming {
    const KIND: SportKind = SportKind::Swim;
}

/// An `Activity` classified by kind and carrying a distance.
pub trait Sport: Activity {
    type Kind: KindTag;

    fn distance(&self) -> Distance;

    fn kind(&self) -> SportKind {
        <Self::Kind as KindTag>::KIND
    }
}
