//! Catalog descriptors: plugins, their settings, categories, and themes.
//!
//! Descriptors are loaded once at startup from static data and treated as
//! immutable for the lifetime of the process.

use crate::value::{HexColor, SettingKind, SettingValue};
use serde::{Deserialize, Serialize};

/// One selectable plugin in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginDescriptor {
    /// Unique identifier, doubling as the display name.
    pub name: String,
    pub description: String,
    pub author: String,
    /// Category key (e.g. `utility`, `appearance`).
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Core plugins are always enabled and cannot be toggled off.
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<SettingDescriptor>,
}

impl PluginDescriptor {
    /// Looks up a setting descriptor by its identifier.
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&SettingDescriptor> {
        self.settings.iter().find(|s| s.name == name)
    }

    /// Case-insensitive substring match over name, description, author,
    /// category, and tags. An empty query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// A single named, typed setting declared by a plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDescriptor {
    /// Identifier, unique within the owning plugin.
    pub name: String,
    /// User-facing label.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub spec: SettingSpec,
}

impl SettingDescriptor {
    /// The declared kind of this setting.
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        self.spec.kind()
    }

    /// The declared default, materialized as a runtime value.
    #[must_use]
    pub fn default_value(&self) -> SettingValue {
        self.spec.default_value()
    }
}

/// Kind-specific payload of a setting declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SettingSpec {
    Checkbox {
        default: bool,
    },
    Text {
        default: String,
    },
    Number {
        default: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Color {
        default: HexColor,
    },
    Select {
        default: String,
        options: Vec<SelectOption>,
    },
}

impl SettingSpec {
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        match self {
            Self::Checkbox { .. } => SettingKind::Checkbox,
            Self::Text { .. } => SettingKind::Text,
            Self::Number { .. } => SettingKind::Number,
            Self::Color { .. } => SettingKind::Color,
            Self::Select { .. } => SettingKind::Select,
        }
    }

    #[must_use]
    pub fn default_value(&self) -> SettingValue {
        match self {
            Self::Checkbox { default } => SettingValue::Bool(*default),
            Self::Text { default } => SettingValue::Text(default.clone()),
            Self::Number { default, .. } => SettingValue::Number(*default),
            Self::Color { default } => SettingValue::Color(default.clone()),
            Self::Select { default, .. } => SettingValue::Choice(default.clone()),
        }
    }
}

/// One option of a `select` setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Display metadata for a plugin category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category key (e.g. `utility`).
    pub key: String,
    /// Display name.
    pub name: String,
    pub description: String,
}

/// A selectable theme contributing one download URL to the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOption {
    pub id: String,
    pub name: String,
    pub author: String,
    pub preview_url: String,
    pub download_url: String,
}
