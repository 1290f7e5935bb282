//! Device / input / profile model shared by every plugin.
//!
//! Built for single-threaded use: one parsing run fills a `ProfileCollection`,
//! then results are combined with `Profile::merge_profiles`. Registries keep
//! insertion order and hold at most one entry per key.

pub mod control;
pub mod device;
#[allow(clippy::module_inception)]
pub mod input;
pub mod modifier;
pub mod profile;
pub mod profile_collection;
