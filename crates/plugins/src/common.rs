use std::path::{Path, PathBuf};

use joystick_diagrams_core::prelude::*;

/// Add `command` for `control` on `device`, as the base command when
/// `modifiers` is empty and as a modifier slot otherwise. Inputs are keyed by
/// the control's stable id.
pub(crate) fn apply_bind(
    device: &mut Device,
    control: Control,
    modifiers: QualifierSet,
    command: &str,
    logger: &dyn CoreLog,
) {
    let input_id = control.to_string();

    if modifiers.is_empty() {
        match device.inputs.get_mut(&input_id) {
            // created earlier by a modifier-only bind
            Some(existing) if existing.command.is_empty() => {
                existing.command = command.to_string();
            }
            Some(existing) => logger.warn(&format!(
                "[apply_bind] {input_id} on {} already bound to '{}', skipping '{command}'",
                device.guid, existing.command
            )),
            None => {
                device.create_input(input_id, control, command, logger);
            }
        }
        return;
    }

    if device.get_input(&input_id).is_none() {
        device.create_input(input_id.clone(), control, "", logger);
    }
    device.add_modifier_to_input(&input_id, modifiers, command, logger);
}

/// Use `path` if it exists; otherwise retry a relative path under `fallback_dir`.
pub(crate) fn resolve_existing_path(path: &Path, fallback_dir: Option<&Path>) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    if path.is_relative() {
        if let Some(candidate) = fallback_dir.map(|dir| dir.join(path)) {
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// `"v_strafe_up"` → `"Strafe up"`, `"attack1"` → `"Attack1"`.
pub(crate) fn name_format(name: &str) -> String {
    let parts: Vec<&str> = name.split('_').filter(|p| !p.is_empty()).collect();
    let joined = match parts.as_slice() {
        [] => String::new(),
        [single] => single.to_string(),
        [_, rest @ ..] => rest.join(" "),
    };
    capitalize(&joined)
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
