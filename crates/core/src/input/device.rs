use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core_log::CoreLog;
use crate::input::{
    control::Control,
    input::{Input, ModifierSlot},
    modifier::QualifierSet,
};

/// A physical controller: lower-cased GUID, display name, and its inputs keyed
/// by the source format's own input id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub inputs: IndexMap<String, Input>,
}

impl Device {
    pub fn new(guid: &str, name: impl Into<String>) -> Self {
        Device {
            guid: normalize_guid(guid),
            name: name.into(),
            inputs: IndexMap::new(),
        }
    }

    /// Insert a new input under `input_id`, or return the one already there.
    /// An existing input is left untouched.
    pub fn create_input(
        &mut self,
        input_id: impl Into<String>,
        identifier: Control,
        command: impl Into<String>,
        logger: &dyn CoreLog,
    ) -> &mut Input {
        let input_id = input_id.into();
        if self.inputs.contains_key(&input_id) {
            logger.warn(&format!(
                "[create_input] input {input_id} already exists on device {} and will not be re-added",
                self.guid
            ));
        }
        self.inputs
            .entry(input_id)
            .or_insert_with(|| Input::new(identifier, command))
    }

    /// Delegate to [`Input::add_modifier`]. Returns `false` (no-op) when the
    /// input was never created.
    pub fn add_modifier_to_input(
        &mut self,
        input_id: &str,
        modifiers: QualifierSet,
        command: impl Into<String>,
        logger: &dyn CoreLog,
    ) -> bool {
        let Some(input) = self.inputs.get_mut(input_id) else {
            logger.debug(&format!(
                "[add_modifier_to_input] input {input_id} not found on device {}",
                self.guid
            ));
            return false;
        };

        if input.add_modifier(modifiers, command) == ModifierSlot::Overridden {
            logger.debug(&format!(
                "[add_modifier_to_input] modifier on {input_id} overridden"
            ));
        }
        true
    }

    pub fn get_input(&self, input_id: &str) -> Option<&Input> {
        self.inputs.get(input_id)
    }

    pub fn get_input_mut(&mut self, input_id: &str) -> Option<&mut Input> {
        self.inputs.get_mut(input_id)
    }
}

/// GUIDs compare case-insensitively; store them lower-cased.
#[inline]
pub fn normalize_guid(guid: &str) -> String {
    guid.trim().to_lowercase()
}
