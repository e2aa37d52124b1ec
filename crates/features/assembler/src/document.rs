//! The generated configuration document.
//!
//! Shapes mirror the file Vencord's backup/restore importer expects. Plugin
//! entries keep catalog declaration order, so the map types here are
//! `Vec`-backed with handwritten `Serialize` impls instead of hash maps.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use vencfg_domain::constants::CLOUD_URL;
use vencfg_domain::value::SettingValue;

/// The complete output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VencordConfig {
    pub settings: SettingsBlock,
    pub notifications: NotificationsBlock,
    pub cloud: CloudBlock,
    pub eager_patches: bool,
    pub quick_css: String,
}

/// The top-level settings block: fixed knobs, theme links, and the plugin map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsBlock {
    pub auto_update: bool,
    pub auto_update_notification: bool,
    pub use_quick_css: bool,
    /// Download URLs of selected themes; never more than one entry.
    pub theme_links: Vec<String>,
    pub enabled_themes: Vec<String>,
    pub enable_react_devtools: bool,
    pub frameless: bool,
    pub transparent: bool,
    pub win_ctrl_q: bool,
    pub disable_min_size: bool,
    pub win_native_title_bar: bool,
    pub plugins: PluginMap,
}

impl Default for SettingsBlock {
    fn default() -> Self {
        Self {
            auto_update: true,
            auto_update_notification: true,
            use_quick_css: true,
            theme_links: Vec::new(),
            enabled_themes: Vec::new(),
            enable_react_devtools: false,
            frameless: false,
            transparent: false,
            win_ctrl_q: false,
            disable_min_size: false,
            win_native_title_bar: false,
            plugins: PluginMap::default(),
        }
    }
}

/// Constant notification policy carried by every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsBlock {
    pub timeout: u32,
    pub position: NotificationPosition,
    pub use_native: UseNative,
    pub log_limit: u32,
}

impl Default for NotificationsBlock {
    fn default() -> Self {
        Self {
            timeout: 5000,
            position: NotificationPosition::BottomRight,
            use_native: UseNative::NotFocused,
            log_limit: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    BottomRight,
    TopRight,
    BottomLeft,
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseNative {
    Always,
    Never,
    NotFocused,
}

/// Cloud-sync stub; `settings_sync_version` carries the issue timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudBlock {
    pub authenticated: bool,
    pub url: String,
    pub settings_sync: bool,
    pub settings_sync_version: i64,
}

impl CloudBlock {
    #[must_use]
    pub fn at(timestamp_millis: i64) -> Self {
        Self {
            authenticated: false,
            url: CLOUD_URL.to_owned(),
            settings_sync: false,
            settings_sync_version: timestamp_millis,
        }
    }
}

/// Plugin identifier → entry, preserving catalog declaration order.
///
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginMap(Vec<PluginEntry>);

impl PluginMap {
    pub fn push(&mut self, entry: PluginEntry) {
        self.0.push(entry);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.0.iter().find(|e| e.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PluginEntry> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PluginMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.name, entry)?;
        }
        map.end()
    }
}

/// One plugin's config: the enabled flag followed by its materialized
/// setting values, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginEntry {
    pub name: String,
    pub enabled: bool,
    pub values: Vec<SettingSlot>,
}

impl PluginEntry {
    #[must_use]
    pub fn value(&self, setting: &str) -> Option<&SettingValue> {
        self.values.iter().find(|s| s.name == setting).map(|s| &s.value)
    }

    pub(crate) fn slot_mut(&mut self, setting: &str) -> Option<&mut SettingSlot> {
        self.values.iter_mut().find(|s| s.name == setting)
    }
}

impl Serialize for PluginEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.values.len()))?;
        map.serialize_entry("enabled", &self.enabled)?;
        for slot in &self.values {
            map.serialize_entry(&slot.name, &slot.value)?;
        }
        map.end()
    }
}

/// A named, materialized setting value inside a [`PluginEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct SettingSlot {
    pub name: String,
    pub value: SettingValue,
}
