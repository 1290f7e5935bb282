//! Decompose a bind token (`hat1_up`, `lalt+button3`, `rotz`, `slider1`) into
//! its qualifier set and the control it names.
//!
//! Device prefixes (`js1_`) are the caller's business and must already be
//! stripped. Unrecognized tokens resolve to `None`; they are not errors.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::input::{
    control::{AxisDirection, Control, HatDirection},
    modifier::QualifierSet,
};

static BUTTON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^button(\d+)$").unwrap());
static HAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^hat(\d+)_(up|down|left|right)$").unwrap());
static SLIDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^slider(\d+)$").unwrap());

pub static HAT_FORMAT_LOOKUP: Lazy<HashMap<&'static str, HatDirection>> = Lazy::new(|| {
    [
        ("up", HatDirection::Up),
        ("down", HatDirection::Down),
        ("left", HatDirection::Left),
        ("right", HatDirection::Right),
    ]
    .into_iter()
    .collect()
});

pub static AXIS_NAMES: Lazy<HashMap<&'static str, AxisDirection>> = Lazy::new(|| {
    [
        ("x", AxisDirection::X),
        ("y", AxisDirection::Y),
        ("z", AxisDirection::Z),
        ("rotx", AxisDirection::RX),
        ("roty", AxisDirection::RY),
        ("rotz", AxisDirection::RZ),
        ("rx", AxisDirection::RX),
        ("ry", AxisDirection::RY),
        ("rz", AxisDirection::RZ),
    ]
    .into_iter()
    .collect()
});

/// Split `raw` on `+`: leading segments are qualifiers, the last names the control.
pub fn resolve_bind(raw: &str) -> (QualifierSet, Option<Control>) {
    let token = raw.trim().to_ascii_lowercase();

    let mut segments: Vec<&str> = token
        .split('+')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let Some(main) = segments.pop() else {
        return (QualifierSet::new(), None);
    };

    let modifiers: QualifierSet = segments.into_iter().map(String::from).collect();
    (modifiers, resolve_control(main))
}

/// Resolve a single, already lower-cased control token.
pub fn resolve_control(token: &str) -> Option<Control> {
    if let Some(c) = BUTTON.captures(token) {
        return c[1].parse().ok().map(Control::button);
    }
    if let Some(c) = HAT.captures(token) {
        let index = c[1].parse().ok()?;
        let direction = *HAT_FORMAT_LOOKUP.get(&c[2])?;
        return Some(Control::hat(index, direction));
    }
    if let Some(c) = SLIDER.captures(token) {
        return c[1].parse().ok().map(Control::slider);
    }
    AXIS_NAMES.get(token).copied().map(Control::axis)
}
