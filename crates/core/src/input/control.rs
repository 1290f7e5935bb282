use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Physical axis on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDirection {
    X,
    Y,
    Z,
    RX,
    RY,
    RZ,
}

impl AxisDirection {
    pub fn name(&self) -> &'static str {
        match self {
            AxisDirection::X => "X",
            AxisDirection::Y => "Y",
            AxisDirection::Z => "Z",
            AxisDirection::RX => "RX",
            AxisDirection::RY => "RY",
            AxisDirection::RZ => "RZ",
        }
    }

    pub const ALL: [AxisDirection; 6] = [
        AxisDirection::X,
        AxisDirection::Y,
        AxisDirection::Z,
        AxisDirection::RX,
        AxisDirection::RY,
        AxisDirection::RZ,
    ];
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisDirection {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(AxisDirection::X),
            "Y" => Ok(AxisDirection::Y),
            "Z" => Ok(AxisDirection::Z),
            "RX" => Ok(AxisDirection::RX),
            "RY" => Ok(AxisDirection::RY),
            "RZ" => Ok(AxisDirection::RZ),
            _ => Err("expected one of: x, y, z, rx, ry, rz"),
        }
    }
}

/// Direction of a POV hat, rendered as its single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HatDirection {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl HatDirection {
    pub fn code(&self) -> &'static str {
        match self {
            HatDirection::Up => "U",
            HatDirection::Down => "D",
            HatDirection::Left => "L",
            HatDirection::Right => "R",
        }
    }

    /// Accepts both the long form (`up`) and the code (`U`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Some(HatDirection::Up),
            "down" | "d" => Some(HatDirection::Down),
            "left" | "l" => Some(HatDirection::Left),
            "right" | "r" => Some(HatDirection::Right),
            _ => None,
        }
    }
}

impl fmt::Display for HatDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The physical control surface an input is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    Axis { direction: AxisDirection },
    AxisSlider { index: u32 },
    Button { index: u32 },
    Hat { index: u32, direction: HatDirection },
}

impl Control {
    #[inline]
    pub fn axis(direction: AxisDirection) -> Self {
        Control::Axis { direction }
    }

    #[inline]
    pub fn slider(index: u32) -> Self {
        Control::AxisSlider { index }
    }

    #[inline]
    pub fn button(index: u32) -> Self {
        Control::Button { index }
    }

    #[inline]
    pub fn hat(index: u32, direction: HatDirection) -> Self {
        Control::Hat { index, direction }
    }
}

// Stable ids: BUTTON_12, HAT_1_U, AXIS_RZ, AXIS_SLIDER_1
impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Axis { direction } => write!(f, "AXIS_{direction}"),
            Control::AxisSlider { index } => write!(f, "AXIS_SLIDER_{index}"),
            Control::Button { index } => write!(f, "BUTTON_{index}"),
            Control::Hat { index, direction } => write!(f, "HAT_{index}_{direction}"),
        }
    }
}

impl FromStr for Control {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bad = || format!("not a control id: '{s}'");

        if let Some(rest) = upper.strip_prefix("AXIS_SLIDER_") {
            return rest.parse().map(Control::slider).map_err(|_| bad());
        }
        if let Some(rest) = upper.strip_prefix("AXIS_") {
            return rest.parse().map(Control::axis).map_err(|_| bad());
        }
        if let Some(rest) = upper.strip_prefix("BUTTON_") {
            return rest.parse().map(Control::button).map_err(|_| bad());
        }
        if let Some(rest) = upper.strip_prefix("HAT_") {
            let (index, dir) = rest.split_once('_').ok_or_else(bad)?;
            let index = index.parse().map_err(|_| bad())?;
            let direction = HatDirection::parse(dir).ok_or_else(bad)?;
            return Ok(Control::hat(index, direction));
        }
        Err(bad())
    }
}
