use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core_log::CoreLog;
use crate::input::profile::Profile;

/// Every profile produced by one parsing run, keyed by profile name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileCollection {
    #[serde(default)]
    pub profiles: IndexMap<String, Profile>,
}

impl ProfileCollection {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty profile under `name`, or return the existing one as-is.
    pub fn create_profile(&mut self, name: &str, logger: &dyn CoreLog) -> &mut Profile {
        if self.profiles.contains_key(name) {
            logger.warn(&format!(
                "[create_profile] profile {name} already exists and will not be reset"
            ));
        }
        self.profiles
            .entry(name.to_string())
            .or_insert_with(|| Profile::new(name))
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn get_profile_mut(&mut self, name: &str) -> Option<&mut Profile> {
        self.profiles.get_mut(name)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Overlay `other` onto a copy of `self`, profile by profile name.
    /// Same-named profiles go through [`Profile::merge_profiles`].
    pub fn merge(&self, other: &ProfileCollection) -> ProfileCollection {
        let mut merged = self.clone();
        for (name, profile) in &other.profiles {
            let next = match merged.profiles.get(name) {
                Some(existing) => existing.merge_profiles(profile),
                None => profile.clone(),
            };
            merged.profiles.insert(name.clone(), next);
        }
        merged
    }

    /// Fold every profile into one, left to right in insertion order.
    pub fn flatten(&self, name: &str) -> Profile {
        self.profiles
            .values()
            .fold(Profile::new(name), |acc, p| acc.merge_profiles(p))
    }
}
