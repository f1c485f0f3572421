//! Nominal "is-a" hierarchy: `Activity` <- `Sport` <- `Run`.
//!
//! Each level is a trait that requires accessors instead of fields. Concrete
//! records store the values and answer the accessors; every derivation
//! (`duration`, `kind`) is written once on the trait that introduces it.

pub mod activity;
pub mod sport;
pub mod run;

pub use activity::Activity;
pub use run::Run;
pub use sport::{KindTag, Running, Sport, Swimming};
