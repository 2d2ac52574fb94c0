//! The complete SwitchyOmega options document
//!
//! The extension stores profiles as top-level keys prefixed with `+` and its
//! options as keys prefixed with `-`. `Document` keeps them apart in memory
//! and flattens them back into that layout when serialized.

use linked_hash_map::LinkedHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::profile::{ProfileEntry, SwitchProfile};

/// Prefix the extension puts in front of every profile key.
pub const PROFILE_KEY_PREFIX: &str = "+";

/// Extension-wide options written alongside the profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub enable_quick_switch: bool,
    pub quick_switch_profiles: Vec<String>,
    pub refresh_on_profile_change: bool,
    pub revert_proxy_changes: bool,
    pub confirm_deletion: bool,
    pub show_inspect_menu: bool,
    pub add_conditions_to_bottom: bool,
    pub show_external_profile: bool,
    /// Minutes between rule list refreshes.
    pub download_interval: u32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            enable_quick_switch: false,
            quick_switch_profiles: Vec::new(),
            refresh_on_profile_change: true,
            revert_proxy_changes: true,
            confirm_deletion: true,
            show_inspect_menu: true,
            add_conditions_to_bottom: false,
            show_external_profile: true,
            download_interval: 1440,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub schema_version: u32,
    /// Name of the profile the extension starts with.
    pub current_profile: String,
    pub options: Options,
    pub auto_switch: SwitchProfile,
    /// Fixed profile the auto-switch rules route to.
    pub placeholder: ProfileEntry,
    /// One entry per input proxy, in input order, keyed by profile name.
    pub profiles: LinkedHashMap<String, ProfileEntry>,
}

impl Document {
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

fn profile_key(name: &str) -> String {
    format!("{}{}", PROFILE_KEY_PREFIX, name)
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry("schemaVersion", &self.schema_version)?;
        map.serialize_entry("-startupProfileName", &self.current_profile)?;
        map.serialize_entry("-enableQuickSwitch", &self.options.enable_quick_switch)?;
        map.serialize_entry("-quickSwitchProfiles", &self.options.quick_switch_profiles)?;
        map.serialize_entry(
            "-refreshOnProfileChange",
            &self.options.refresh_on_profile_change,
        )?;
        map.serialize_entry("-revertProxyChanges", &self.options.revert_proxy_changes)?;
        map.serialize_entry("-confirmDeletion", &self.options.confirm_deletion)?;
        map.serialize_entry("-showInspectMenu", &self.options.show_inspect_menu)?;
        map.serialize_entry(
            "-addConditionsToBottom",
            &self.options.add_conditions_to_bottom,
        )?;
        map.serialize_entry("-showExternalProfile", &self.options.show_external_profile)?;
        map.serialize_entry("-downloadInterval", &self.options.download_interval)?;

        map.serialize_entry(&profile_key(&self.auto_switch.name), &self.auto_switch)?;
        map.serialize_entry(&profile_key(&self.placeholder.name), &self.placeholder)?;

        for (name, entry) in self.profiles.iter() {
            map.serialize_entry(&profile_key(name), entry)?;
        }

        map.end()
    }
}
