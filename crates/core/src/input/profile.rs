use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core_log::CoreLog;
use crate::input::{
    device::{Device, normalize_guid},
    input::Input,
};

/// One source's (or one context's) bindings, devices keyed by lower-cased GUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub devices: IndexMap<String, Device>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Profile {
            name: name.into(),
            devices: IndexMap::new(),
        }
    }

    /// Register a device, or return the one already registered under `guid`.
    /// The existing device keeps its name.
    pub fn add_device(&mut self, guid: &str, name: &str, logger: &dyn CoreLog) -> &mut Device {
        let guid = normalize_guid(guid);
        if self.devices.contains_key(&guid) {
            logger.warn(&format!(
                "[add_device] device {guid} already exists in {} and will not be re-added",
                self.name
            ));
        }
        self.devices
            .entry(guid)
            .or_insert_with_key(|guid| Device::new(guid, name))
    }

    pub fn get_devices(&self) -> &IndexMap<String, Device> {
        &self.devices
    }

    pub fn get_device(&self, guid: &str) -> Option<&Device> {
        self.devices.get(&normalize_guid(guid))
    }

    pub fn get_device_mut(&mut self, guid: &str) -> Option<&mut Device> {
        self.devices.get_mut(&normalize_guid(guid))
    }

    /// Return a new profile: `self` overlaid with `other`.
    ///
    /// Devices, inputs and modifier slots missing on the left are copied from
    /// the right; on every conflict the right side wins. Neither argument is
    /// modified and the result shares nothing with them.
    pub fn merge_profiles(&self, other: &Profile) -> Profile {
        let mut merged = self.clone();

        for (guid, device) in &other.devices {
            match merged.devices.get_mut(guid) {
                None => {
                    merged.devices.insert(guid.clone(), device.clone());
                }
                Some(existing) => merge_device(existing, device),
            }
        }

        merged
    }
}

fn merge_device(existing: &mut Device, other: &Device) {
    for (input_id, input) in &other.inputs {
        match existing.inputs.get_mut(input_id) {
            None => {
                existing.inputs.insert(input_id.clone(), input.clone());
            }
            Some(current) => merge_input(current, input),
        }
    }
}

fn merge_input(existing: &mut Input, other: &Input) {
    existing.identifier = other.identifier;
    // empty base command means the right side only bound modifiers here
    if !other.command.is_empty() {
        existing.command.clone_from(&other.command);
    }

    for modifier in &other.modifiers {
        match existing.get_modifier_mut(&modifier.modifiers) {
            None => existing.modifiers.push(modifier.clone()),
            Some(current) => current.command.clone_from(&modifier.command),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Profile: {})", self.name)
    }
}
