//! Elite Dangerous `.binds` parsing.
//!
//! ```xml
//! <Root PresetName="Custom" MajorVersion="4" MinorVersion="0">
//!   <YawLeftButton>
//!     <Primary Device="231D0200" Key="Joy_5">
//!       <Modifier Device="Keyboard" Key="Key_LeftShift" />
//!     </Primary>
//!     <Secondary Device="{NoDevice}" Key="" />
//!   </YawLeftButton>
//!   <YawAxisRaw>
//!     <Binding Device="231D0200" Key="Joy_XAxis" />
//!   </YawAxisRaw>
//! </Root>
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::{Document, Node};
use std::{fs, path::Path, path::PathBuf};

use joystick_diagrams_core::prelude::*;

use crate::common::apply_bind;

pub const INVALID_XML: &str = "File is not a valid Elite Dangerous XML";

/// Extensions `BindsFile::load` accepts. The picker only offers `.binds`.
pub const EXTENSIONS: [&str; 2] = [".binds", ".xml"];

pub const HUMANOID_PROFILE: &str = "Humanoid";
pub const SPACESHIP_PROFILE: &str = "Spaceship";

const BIND_TAGS: [&str; 3] = ["Primary", "Secondary", "Binding"];
const SKIP_DEVICES: [&str; 4] = ["{NoDevice}", "Keyboard", "Mouse", "GamePad"];

static JOY_BUTTON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Joy_(\d+)$").unwrap());
static JOY_POV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Joy_POV(\d+)(Up|Down|Left|Right)$").unwrap());
static JOY_AXIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Joy_(R?)([XYZUV])Axis$").unwrap());

/// A `.binds` file that exists, has the right extension, and passed validation.
#[derive(Debug, Clone)]
pub struct BindsFile {
    pub path: PathBuf,
    pub content: String,
}

impl BindsFile {
    /// Read and validate `path`. Fails fast: nothing is parsed on error.
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        if !path.is_file() {
            return Err(PluginError::NotFound(path.to_path_buf()));
        }
        if !has_extension(path, &EXTENSIONS) {
            return Err(PluginError::InvalidFileType(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        validate(&content)?;
        Ok(BindsFile {
            path: path.to_path_buf(),
            content,
        })
    }
}

/// Exactly one `Root`, and at least one `Primary` and one `Secondary`.
pub fn validate(content: &str) -> Result<(), PluginError> {
    let doc = Document::parse(content).map_err(|_| PluginError::invalid_format(INVALID_XML))?;
    let count = |tag: &str| doc.descendants().filter(|n| n.has_tag_name(tag)).count();

    if count("Root") == 1 && count("Primary") > 0 && count("Secondary") > 0 {
        Ok(())
    } else {
        Err(PluginError::invalid_format(INVALID_XML))
    }
}

/// Humanoid (on-foot) actions get their own profile; the rest are ship controls.
pub fn profile_name_for(action: &str) -> &'static str {
    if action.contains("Humanoid") {
        HUMANOID_PROFILE
    } else {
        SPACESHIP_PROFILE
    }
}

/// Translate an ED key (`Joy_12`, `Joy_POV1Up`, `Joy_RZAxis`, `Joy_UAxis`) to a
/// bind token understood by `resolve_bind`.
pub fn key_to_token(key: &str) -> Option<String> {
    let key = key.trim();
    if let Some(c) = JOY_BUTTON.captures(key) {
        return Some(format!("button{}", &c[1]));
    }
    if let Some(c) = JOY_POV.captures(key) {
        return Some(format!("hat{}_{}", &c[1], c[2].to_ascii_lowercase()));
    }
    if let Some(c) = JOY_AXIS.captures(key) {
        let rotated = !c[1].is_empty();
        return match (&c[2], rotated) {
            ("U", false) => Some("slider1".into()),
            ("V", false) => Some("slider2".into()),
            ("U" | "V", true) => None,
            (axis, false) => Some(axis.to_ascii_lowercase()),
            (axis, true) => Some(format!("rot{}", axis.to_ascii_lowercase())),
        };
    }
    None
}

/// Build the collection from validated `.binds` content.
pub fn parse(content: &str, logger: &dyn CoreLog) -> Result<ProfileCollection, PluginError> {
    let doc = Document::parse(content).map_err(|_| PluginError::invalid_format(INVALID_XML))?;
    let mut collection = ProfileCollection::new();
    let mut skipped = 0usize;

    for bind in doc
        .descendants()
        .filter(|n| n.is_element() && BIND_TAGS.contains(&n.tag_name().name()))
    {
        let Some(action) = bind.parent_element() else {
            continue;
        };
        let (Some(device_id), Some(key)) = (non_empty_attr(bind, "Device"), non_empty_attr(bind, "Key"))
        else {
            continue;
        };
        if SKIP_DEVICES.contains(&device_id) {
            continue;
        }

        let Some((modifiers, control)) = resolve_key(bind, key) else {
            logger.warn(&format!(
                "[parse] bind could not be resolved for {device_id} {key}"
            ));
            skipped += 1;
            continue;
        };

        // Repeat creates are expected while walking binds; no duplicate notices.
        let command = action.tag_name().name();
        let device = collection
            .create_profile(profile_name_for(command), &NoopLog)
            .add_device(device_id, device_id, &NoopLog);
        apply_bind(device, control, modifiers, command, logger);
    }

    logger.info(&format!(
        "[parse] {} profiles, {} devices, {skipped} unresolved binds",
        collection.len(),
        collection
            .profiles
            .values()
            .map(|p| p.devices.len())
            .sum::<usize>()
    ));
    Ok(collection)
}

fn resolve_key(bind: Node, key: &str) -> Option<(QualifierSet, Control)> {
    let token = key_to_token(key)?;
    let (_, control) = resolve_bind(&token);
    let modifiers = bind
        .children()
        .filter(|n| n.has_tag_name("Modifier"))
        .filter_map(|m| {
            let key = non_empty_attr(m, "Key")?;
            Some(match non_empty_attr(m, "Device") {
                Some("Keyboard") | None => key.to_string(),
                Some(dev) => format!("{dev}_{key}"),
            })
        })
        .collect();
    control.map(|c| (modifiers, c))
}

#[inline]
fn non_empty_attr<'a>(node: Node<'a, '_>, key: &str) -> Option<&'a str> {
    node.attribute(key)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
