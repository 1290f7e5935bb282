//! Star Citizen `actionmaps.xml` parsing.
//!
//! Joystick devices are declared by `<options type="joystick" instance="1"
//! Product="Name  {GUID}"/>` and referenced from rebinds as `js1_<binding>`.

use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::{fs, path::Path, path::PathBuf};

use joystick_diagrams_core::prelude::*;

use crate::common::{apply_bind, name_format};

pub const INVALID_XML: &str = "File is not a valid Star Citizen actionmaps XML";
pub const EXTENSIONS: [&str; 1] = [".xml"];
pub const DEFAULT_PROFILE: &str = "default";

/// Device type → bind prefix as it appears in `input="..."`.
const DEVICE_PREFIXES: [(&str, &str); 4] = [
    ("joystick", "js"),
    ("keyboard", "kb"),
    ("mouse", "mo"),
    ("gamepad", "gp"),
];

/// Actions whose raw names read poorly once the prefix is dropped.
const CUSTOM_LABELS: [(&str, &str); 3] = [
    ("attack1", "z_attack"),
    ("combatheal", "z_combat_heal"),
    ("combathealtarget", "z_heal_target"),
];

#[derive(Debug, Clone)]
pub struct ActionMapsFile {
    pub path: PathBuf,
    pub content: String,
}

impl ActionMapsFile {
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        if !path.is_file() {
            return Err(PluginError::NotFound(path.to_path_buf()));
        }
        if !has_extension(path, &EXTENSIONS) {
            return Err(PluginError::InvalidFileType(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        validate(&content)?;
        Ok(ActionMapsFile {
            path: path.to_path_buf(),
            content,
        })
    }
}

/// `ActionMaps` root containing at least one `actionmap`.
pub fn validate(content: &str) -> Result<(), PluginError> {
    let doc = Document::parse(content).map_err(|e| {
        PluginError::invalid_format(format!("{INVALID_XML}: {e}"))
    })?;
    let root_ok = doc.root_element().has_tag_name("ActionMaps");
    let has_maps = doc.descendants().any(|n| n.has_tag_name("actionmap"));
    if root_ok && has_maps {
        Ok(())
    } else {
        Err(PluginError::invalid_format(INVALID_XML))
    }
}

/// A joystick declared in `<options>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub guid: String,
}

/// Split `" VKB Gladiator  {0200231D-0000-0000-0000-504944564944}"` into name and GUID.
pub fn parse_product(product: &str) -> Option<DeviceInfo> {
    let product = product.trim();
    let open = product.rfind('{')?;
    let guid = product[open + 1..].trim_end_matches('}').trim();
    if guid.is_empty() {
        return None;
    }
    Some(DeviceInfo {
        name: product[..open].trim().to_string(),
        guid: guid.to_string(),
    })
}

/// Map `js1` style ids to devices declared under `profile`, keeping only
/// device types whose prefix is in `accepted_prefixes`.
pub fn device_lookup(
    profile: Node,
    accepted_prefixes: &[String],
    logger: &dyn CoreLog,
) -> HashMap<String, DeviceInfo> {
    let mut devices = HashMap::new();

    for option in profile.children().filter(|n| n.has_tag_name("options")) {
        let Some(ty) = option.attribute("type") else {
            continue;
        };
        let Some(prefix) = DEVICE_PREFIXES
            .iter()
            .find(|(t, _)| *t == ty)
            .map(|(_, p)| *p)
            .filter(|p| accepted_prefixes.iter().any(|a| a.as_str() == *p))
        else {
            continue;
        };
        let instance = option.attribute("instance").unwrap_or("1").trim();
        let Some(info) = option.attribute("Product").and_then(parse_product) else {
            logger.warn(&format!(
                "[device_lookup] {ty} {instance} has no usable Product attribute"
            ));
            continue;
        };
        devices.insert(format!("{prefix}{instance}"), info);
    }

    logger.debug(&format!("[device_lookup] {devices:?}"));
    devices
}

pub fn human_readable_name(action: &str) -> String {
    let label = CUSTOM_LABELS
        .iter()
        .find(|(k, _)| *k == action)
        .map_or(action, |(_, v)| *v);
    name_format(label)
}

/// Build one profile per `ActionProfiles` element.
pub fn parse(
    content: &str,
    accepted_prefixes: &[String],
    logger: &dyn CoreLog,
) -> Result<ProfileCollection, PluginError> {
    let doc = Document::parse(content)
        .map_err(|e| PluginError::invalid_format(format!("{INVALID_XML}: {e}")))?;
    let mut collection = ProfileCollection::new();

    for profile_node in doc
        .descendants()
        .filter(|n| n.has_tag_name("ActionProfiles"))
    {
        let profile_name = profile_node
            .attribute("profileName")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PROFILE);
        let devices = device_lookup(profile_node, accepted_prefixes, logger);
        let profile = collection.create_profile(profile_name, logger);

        for action in profile_node
            .descendants()
            .filter(|n| n.has_tag_name("action"))
        {
            let Some(action_name) = action.attribute("name") else {
                continue;
            };
            let command = human_readable_name(action_name);

            for rebind in action.children().filter(|n| n.has_tag_name("rebind")) {
                let raw = rebind.attribute("input").unwrap_or("");
                let Some((info, modifiers, control)) = resolve_input(raw, &devices, logger) else {
                    continue;
                };
                // Same device shows up once per rebind; no duplicate notices.
                let device = profile.add_device(&info.guid, &info.name, &NoopLog);
                apply_bind(device, control, modifiers, &command, logger);
            }
        }
    }

    Ok(collection)
}

/// `js1_lalt+button3` → (device, {lalt}, Button(3)). `None` for devices we
/// don't track, blank binds (`js1_ `), and tokens that don't resolve.
pub fn resolve_input<'d>(
    raw: &str,
    devices: &'d HashMap<String, DeviceInfo>,
    logger: &dyn CoreLog,
) -> Option<(&'d DeviceInfo, QualifierSet, Control)> {
    let raw = raw.trim();
    let (device_id, binding) = raw.split_once('_')?;
    let device = devices.get(device_id)?;

    let binding = binding.trim();
    if binding.is_empty() {
        return None;
    }

    match resolve_bind(binding) {
        (modifiers, Some(control)) => Some((device, modifiers, control)),
        (_, None) => {
            logger.warn(&format!("[resolve_input] bind could not be resolved for {raw}"));
            None
        }
    }
}
