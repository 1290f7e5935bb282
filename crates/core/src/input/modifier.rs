use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Qualifier tokens held together with a control (e.g. `{"lalt", "rctrl"}`).
/// Order is meaningless; two sets name the same slot iff they are set-equal.
pub type QualifierSet = HashSet<String>;

/// Build a qualifier set from anything string-like.
pub fn qualifiers<I, S>(tokens: I) -> QualifierSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Into::into).collect()
}

/// A command that replaces the base command while `modifiers` are held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub modifiers: QualifierSet,
    pub command: String,
}

impl Modifier {
    pub fn new(modifiers: QualifierSet, command: impl Into<String>) -> Self {
        Modifier {
            modifiers,
            command: command.into(),
        }
    }

    #[inline]
    pub fn matches(&self, qualifiers: &QualifierSet) -> bool {
        self.modifiers == *qualifiers
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted for readable output only; the set itself carries no order.
        let mut mods: Vec<&str> = self.modifiers.iter().map(String::as_str).collect();
        mods.sort_unstable();
        write!(f, "{} => {}", mods.join("+"), self.command)
    }
}
