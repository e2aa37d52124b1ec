//! # Config Assembler
//!
//! Builds the configuration document from the static catalog plus the user's
//! selection state, in three pure steps:
//!
//! 1. [`build_baseline`] — every catalog plugin at its declared defaults,
//!    enabled only if always-on.
//! 2. [`apply_selections`] — overlays the user's enabled flags and setting
//!    overrides, coercing each override to its declared kind.
//! 3. [`apply_theme`] — replaces the theme-link list with the selected
//!    theme's download URL (or clears it).
//!
//! Every operation returns a new document and recovers locally from bad
//! input: unknown plugin references are dropped with a warning, invalid
//! overrides fall back to declared defaults. The assembler performs no I/O;
//! serialization via [`to_pretty_json`] is the only fallible step.

mod coerce;
mod document;
mod error;

pub use crate::document::{
    CloudBlock, NotificationPosition, NotificationsBlock, PluginEntry, PluginMap, SettingSlot,
    SettingsBlock, UseNative, VencordConfig,
};
pub use crate::error::AssemblerError;

use crate::coerce::coerce_override;
use fxhash::FxHashSet;
use serde::Serialize;
use vencfg_domain::catalog::{PluginDescriptor, ThemeOption};
use vencfg_domain::constants::{
    DEFAULT_SETTINGS_LOCATION, SETTINGS_LOCATION, SETTINGS_PLUGIN,
};
use vencfg_domain::value::SettingValue;
use vencfg_selection::SelectionMap;

/// Builds the baseline document: one entry per catalog plugin, enabled only
/// when always-on, every setting at its declared default.
///
/// The `Settings` plugin's panel-location setting is special-cased to the
/// location resolved once from the catalog (falling back to `aboveNitro`),
/// mirroring the importer's expectation that this value is always present.
///
/// An empty catalog yields a document with an empty plugin map. There are no
/// error conditions.
#[must_use]
pub fn build_baseline(
    plugins: &[PluginDescriptor],
    always_on: &FxHashSet<String>,
) -> VencordConfig {
    let location = resolve_settings_location(plugins);

    let mut map = PluginMap::default();
    for plugin in plugins {
        let values = plugin
            .settings
            .iter()
            .map(|setting| {
                let value = if plugin.name == SETTINGS_PLUGIN && setting.name == SETTINGS_LOCATION
                {
                    location.clone()
                } else {
                    setting.default_value()
                };
                SettingSlot { name: setting.name.clone(), value }
            })
            .collect();
        map.push(PluginEntry {
            name: plugin.name.clone(),
            enabled: always_on.contains(&plugin.name),
            values,
        });
    }

    VencordConfig {
        settings: SettingsBlock { plugins: map, ..SettingsBlock::default() },
        notifications: NotificationsBlock::default(),
        cloud: CloudBlock::at(chrono::Utc::now().timestamp_millis()),
        eager_patches: false,
        quick_css: String::new(),
    }
}

/// Overlays the user's selections onto `baseline`, returning a new document.
///
/// Always-on plugins are forced enabled regardless of their selection.
/// Overrides are materialized only onto enabled plugins, each coerced to its
/// declared kind; settings without overrides keep their baseline defaults.
/// Selections referencing plugins absent from the baseline are dropped with
/// a warning. The operation is pure and idempotent.
#[must_use]
pub fn apply_selections(
    baseline: &VencordConfig,
    plugins: &[PluginDescriptor],
    selections: &SelectionMap,
    always_on: &FxHashSet<String>,
) -> VencordConfig {
    let mut doc = baseline.clone();

    for entry in doc.settings.plugins.iter_mut() {
        let Some(selection) = selections.get(&entry.name) else { continue };

        let is_core = always_on.contains(&entry.name);
        entry.enabled = is_core || selection.enabled;
        if !entry.enabled {
            continue;
        }

        let Some(descriptor) = plugins.iter().find(|p| p.name == entry.name) else { continue };
        for setting in &descriptor.settings {
            let Some(raw) = selection.overrides.get(&setting.name) else { continue };
            let value = coerce_override(&descriptor.name, setting, raw);
            if let Some(slot) = entry.slot_mut(&setting.name) {
                slot.value = value;
            }
        }
    }

    for name in selections.keys() {
        if !doc.settings.plugins.contains(name) {
            tracing::warn!(plugin = %name, "selection references unknown plugin, dropped");
        }
    }

    doc
}

/// Replaces the document's theme links with the selected theme's download
/// URL. `None` or an unknown id clears the list; selecting a theme is always
/// a full replace, never an append.
#[must_use]
pub fn apply_theme(
    document: &VencordConfig,
    theme_id: Option<&str>,
    themes: &[ThemeOption],
) -> VencordConfig {
    let mut doc = document.clone();
    doc.settings.theme_links = theme_id
        .and_then(|id| themes.iter().find(|t| t.id == id))
        .map(|t| vec![t.download_url.clone()])
        .unwrap_or_default();
    doc
}

/// Serializes the document to indented, human-readable JSON (4 spaces),
/// with key order stable per the catalog declaration.
///
/// # Errors
/// Returns [`AssemblerError::Serialize`] if serialization fails.
pub fn to_pretty_json(document: &VencordConfig) -> Result<String, AssemblerError> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document.serialize(&mut serializer)?;
    // serde_json emits valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn resolve_settings_location(plugins: &[PluginDescriptor]) -> SettingValue {
    plugins
        .iter()
        .find(|p| p.name == SETTINGS_PLUGIN)
        .and_then(|p| p.setting(SETTINGS_LOCATION))
        .map_or_else(
            || SettingValue::Choice(DEFAULT_SETTINGS_LOCATION.to_owned()),
            |s| s.default_value(),
        )
}
