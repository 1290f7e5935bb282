//! Core model for joystick binding diagrams.
//!
//! This crate is UI-agnostic and format-agnostic. It exposes:
//! - `input`: controls, modifiers, inputs, devices, profiles, and the merge.
//! - `bindings`: `resolve_bind` for turning raw bind tokens into controls.
//! - `plugin`: the `Plugin` contract plus persisted plugin state.
//! - `config`: the `Settings` struct plugins are built from.
//! - `core_log::CoreLog`: thin logging trait the host implements.
//!
//! Import the `prelude` if you want the most common types in scope.

pub mod core_log;
pub mod error;

pub mod bindings;
pub mod config;
pub mod input;
pub mod plugin;

/// Convenient re-exports for downstream users (plugins/CLI/tests).
pub use core_log::CoreLog;

pub mod prelude {
    pub use crate::core_log::{CoreLog, NoopLog};
    pub use crate::error::{ConfigError, PluginError};

    // Model
    pub use crate::input::control::{AxisDirection, Control, HatDirection};
    pub use crate::input::device::{Device, normalize_guid};
    pub use crate::input::input::{Input, ModifierSlot};
    pub use crate::input::modifier::{Modifier, QualifierSet, qualifiers};
    pub use crate::input::profile::Profile;
    pub use crate::input::profile_collection::ProfileCollection;

    // Binds
    pub use crate::bindings::resolve_bind::{resolve_bind, resolve_control};

    // Plugins + settings
    pub use crate::config::Settings;
    pub use crate::plugin::state::PluginState;
    pub use crate::plugin::{FilePath, Plugin, has_extension};
}
