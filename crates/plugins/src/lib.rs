//! Built-in parser plugins.
//!
//! Plugins are listed here at compile time; there is no runtime discovery.
//! Each one implements `joystick_diagrams_core::plugin::Plugin`.

mod common;

pub mod elite_dangerous;
pub mod star_citizen;

use std::sync::Arc;

use joystick_diagrams_core::prelude::*;

pub use elite_dangerous::EliteDangerous;
pub use star_citizen::StarCitizen;

/// Ids of every built-in plugin, in registry order.
pub const PLUGIN_IDS: [&str; 2] = [elite_dangerous::PLUGIN_ID, star_citizen::PLUGIN_ID];

/// Instantiate every built-in plugin.
pub fn builtin_plugins(settings: &Arc<Settings>, logger: &Arc<dyn CoreLog>) -> Vec<Box<dyn Plugin>> {
    PLUGIN_IDS
        .iter()
        .filter_map(|id| find_plugin(id, settings, logger))
        .collect()
}

/// Instantiate the plugin registered as `id` (hyphens and case are ignored).
pub fn find_plugin(
    id: &str,
    settings: &Arc<Settings>,
    logger: &Arc<dyn CoreLog>,
) -> Option<Box<dyn Plugin>> {
    let id = id.trim().to_ascii_lowercase().replace('-', "_");
    match id.as_str() {
        elite_dangerous::PLUGIN_ID | "ed" => Some(Box::new(EliteDangerous::new(
            Arc::clone(settings),
            Arc::clone(logger),
        ))),
        star_citizen::PLUGIN_ID | "sc" => Some(Box::new(StarCitizen::new(
            Arc::clone(settings),
            Arc::clone(logger),
        ))),
        _ => None,
    }
}
