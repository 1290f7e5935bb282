use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::{
    control::Control,
    modifier::{Modifier, QualifierSet},
};

/// What [`Input::add_modifier`] did with the qualifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierSlot {
    Added,
    Overridden,
}

/// One control on a device, its base command, and modifier overrides in
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub identifier: Control,
    pub command: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

impl Input {
    pub fn new(identifier: Control, command: impl Into<String>) -> Self {
        Input {
            identifier,
            command: command.into(),
            modifiers: Vec::new(),
        }
    }

    /// Add a modifier, or override the command of the slot whose qualifier set
    /// is equal to `modifiers`.
    pub fn add_modifier(
        &mut self,
        modifiers: QualifierSet,
        command: impl Into<String>,
    ) -> ModifierSlot {
        let command = command.into();
        match self.get_modifier_mut(&modifiers) {
            Some(existing) => {
                existing.command = command;
                ModifierSlot::Overridden
            }
            None => {
                self.modifiers.push(Modifier::new(modifiers, command));
                ModifierSlot::Added
            }
        }
    }

    pub fn get_modifier(&self, modifiers: &QualifierSet) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.matches(modifiers))
    }

    pub fn get_modifier_mut(&mut self, modifiers: &QualifierSet) -> Option<&mut Modifier> {
        self.modifiers.iter_mut().find(|m| m.matches(modifiers))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.identifier, self.command)?;
        for m in &self.modifiers {
            write!(f, " [{m}]")?;
        }
        Ok(())
    }
}
