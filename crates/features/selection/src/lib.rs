//! # Selection Store
//!
//! The mutable per-plugin selection state owned by the UI layer: which
//! plugins are enabled, which setting overrides the user typed, and which
//! theme (if any) is selected. The store is an explicitly owned object with
//! a defined update API; nothing here is global.
//!
//! Override values are stored as the raw JSON scalars the UI widgets
//! produced. Coercion to the declared setting kinds happens later, when the
//! assembler materializes a document.

use fxhash::{FxHashMap, FxHashSet};
use serde_json::Value;
use vencfg_domain::catalog::{PluginDescriptor, SettingDescriptor};
use vencfg_domain::value::{SettingKind, SettingValue};

/// Per-plugin selection state, keyed by plugin identifier.
pub type SelectionMap = FxHashMap<String, PluginSelection>;

/// Enabled flag plus raw setting overrides for one plugin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginSelection {
    pub enabled: bool,
    /// Setting identifier → raw value as supplied by the UI.
    pub overrides: FxHashMap<String, Value>,
}

/// The selection state for the whole catalog plus the selected theme.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    plugins: SelectionMap,
    theme: Option<String>,
}

impl SelectionStore {
    /// Creates a store with one entry per catalog plugin: required plugins
    /// enabled, every setting pre-seeded with its declared default.
    #[must_use]
    pub fn initialize(plugins: &[PluginDescriptor], always_on: &FxHashSet<String>) -> Self {
        let entries = plugins
            .iter()
            .map(|plugin| {
                let overrides = plugin
                    .settings
                    .iter()
                    .map(|s| (s.name.clone(), raw_default(s)))
                    .collect();
                let selection =
                    PluginSelection { enabled: always_on.contains(&plugin.name), overrides };
                (plugin.name.clone(), selection)
            })
            .collect();
        Self { plugins: entries, theme: None }
    }

    /// The per-plugin selection mapping, as consumed by the assembler.
    #[must_use]
    pub const fn selections(&self) -> &SelectionMap {
        &self.plugins
    }

    /// The currently selected theme id, if any.
    #[must_use]
    pub fn selected_theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Replaces the selected theme. At most one theme is ever selected;
    /// passing a new id is a full replace, `None` clears it.
    pub fn select_theme(&mut self, theme: Option<String>) {
        self.theme = theme;
    }

    /// Whether the named plugin is currently enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.plugins.get(name).is_some_and(|s| s.enabled)
    }

    /// Toggles a plugin, preserving its overrides.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) {
        match self.plugins.get_mut(name) {
            Some(selection) => selection.enabled = enabled,
            None => tracing::warn!(plugin = %name, "toggle for unknown plugin ignored"),
        }
    }

    /// Records a raw override for one setting of one plugin.
    pub fn set_override(&mut self, plugin: &str, setting: &str, value: Value) {
        match self.plugins.get_mut(plugin) {
            Some(selection) => {
                selection.overrides.insert(setting.to_owned(), value);
            }
            None => tracing::warn!(plugin = %plugin, "override for unknown plugin ignored"),
        }
    }

    /// The raw override recorded for a setting, if any.
    #[must_use]
    pub fn override_value(&self, plugin: &str, setting: &str) -> Option<&Value> {
        self.plugins.get(plugin).and_then(|s| s.overrides.get(setting))
    }

    /// The UI-facing value for an input widget: the recorded override if
    /// present, the declared default otherwise. Colors come back **with**
    /// the `#` marker restored, inverting the marker strip the assembler
    /// performs on write.
    #[must_use]
    pub fn display_value(&self, plugin: &str, setting: &SettingDescriptor) -> Value {
        let current = self
            .override_value(plugin, &setting.name)
            .cloned()
            .unwrap_or_else(|| raw_default(setting));

        if setting.kind() == SettingKind::Color {
            if let Value::String(s) = &current {
                if !s.starts_with('#') {
                    return Value::String(format!("#{s}"));
                }
            }
        }
        current
    }

    /// Bulk: enables every plugin, preserving existing overrides.
    pub fn select_all(&mut self) {
        for selection in self.plugins.values_mut() {
            selection.enabled = true;
        }
    }

    /// Bulk: disables every non-required plugin, forces required plugins on,
    /// and clears the selected theme. Overrides are preserved.
    pub fn select_none(&mut self, always_on: &FxHashSet<String>) {
        for (name, selection) in &mut self.plugins {
            selection.enabled = always_on.contains(name);
        }
        self.theme = None;
    }

    /// Bulk: resets every plugin's overrides to catalog defaults, enables
    /// plugins that are required or suggested, and selects the suggested
    /// theme.
    pub fn select_suggested(
        &mut self,
        plugins: &[PluginDescriptor],
        always_on: &FxHashSet<String>,
        suggested_ids: &FxHashSet<String>,
        suggested_theme: Option<&str>,
    ) {
        self.plugins = plugins
            .iter()
            .map(|plugin| {
                let overrides = plugin
                    .settings
                    .iter()
                    .map(|s| (s.name.clone(), raw_default(s)))
                    .collect();
                let enabled =
                    always_on.contains(&plugin.name) || suggested_ids.contains(&plugin.name);
                (plugin.name.clone(), PluginSelection { enabled, overrides })
            })
            .collect();
        self.theme = suggested_theme.map(str::to_owned);
    }
}

/// A setting's declared default as the raw JSON scalar UI widgets work with.
/// Colors are represented marker-stripped, matching the stored form.
#[must_use]
pub fn raw_default(setting: &SettingDescriptor) -> Value {
    raw_value(&setting.default_value())
}

/// Converts a materialized value into its raw JSON scalar form.
#[must_use]
pub fn raw_value(value: &SettingValue) -> Value {
    match value {
        SettingValue::Bool(b) => Value::Bool(*b),
        SettingValue::Number(n) => {
            serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number)
        }
        SettingValue::Text(s) | SettingValue::Choice(s) => Value::String(s.clone()),
        SettingValue::Color(c) => Value::String(c.as_str().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> (Vec<PluginDescriptor>, FxHashSet<String>) {
        let plugins: Vec<PluginDescriptor> = serde_json::from_value(json!([
            { "name": "A", "description": "", "author": "t", "category": "core",
              "required": true },
            { "name": "B", "description": "", "author": "t", "category": "misc",
              "settings": [
                  { "kind": "checkbox", "name": "x", "label": "X:", "default": false }
              ] }
        ]))
        .unwrap();
        let always_on = std::iter::once("A".to_owned()).collect();
        (plugins, always_on)
    }

    #[test]
    fn initialize_creates_one_entry_per_plugin() {
        let (plugins, always_on) = catalog();
        let store = SelectionStore::initialize(&plugins, &always_on);

        assert_eq!(store.selections().len(), 2);
        assert!(store.is_enabled("A"));
        assert!(!store.is_enabled("B"));
        assert_eq!(store.override_value("B", "x"), Some(&json!(false)));
        assert!(store.selected_theme().is_none());
    }

    #[test]
    fn select_all_preserves_overrides() {
        let (plugins, always_on) = catalog();
        let mut store = SelectionStore::initialize(&plugins, &always_on);
        store.set_override("B", "x", json!(true));

        store.select_all();

        assert!(store.is_enabled("A"));
        assert!(store.is_enabled("B"));
        assert_eq!(store.override_value("B", "x"), Some(&json!(true)));
    }

    #[test]
    fn select_none_forces_required_and_clears_theme() {
        let (plugins, always_on) = catalog();
        let mut store = SelectionStore::initialize(&plugins, &always_on);
        store.select_all();
        store.select_theme(Some("ClearVision".into()));

        store.select_none(&always_on);

        assert!(store.is_enabled("A"), "required plugin stays enabled");
        assert!(!store.is_enabled("B"));
        assert!(store.selected_theme().is_none());
    }

    #[test]
    fn select_suggested_resets_overrides_and_sets_theme() {
        let (plugins, always_on) = catalog();
        let mut store = SelectionStore::initialize(&plugins, &always_on);
        store.set_override("B", "x", json!(true));

        let suggested: FxHashSet<String> = std::iter::once("B".to_owned()).collect();
        store.select_suggested(&plugins, &always_on, &suggested, Some("ClearVision"));

        assert!(store.is_enabled("A"));
        assert!(store.is_enabled("B"));
        assert_eq!(store.override_value("B", "x"), Some(&json!(false)), "reset to default");
        assert_eq!(store.selected_theme(), Some("ClearVision"));
    }

    #[test]
    fn display_value_restores_color_marker() {
        let plugins: Vec<PluginDescriptor> = serde_json::from_value(json!([
            { "name": "ClientTheme", "description": "", "author": "t",
              "category": "appearance",
              "settings": [
                  { "kind": "color", "name": "color", "label": "Color:", "default": "313338" }
              ] }
        ]))
        .unwrap();
        let store = SelectionStore::initialize(&plugins, &FxHashSet::default());

        let setting = plugins[0].setting("color").unwrap();
        assert_eq!(store.display_value("ClientTheme", setting), json!("#313338"));

        let mut store = store;
        store.set_override("ClientTheme", "color", json!("aabbcc"));
        assert_eq!(store.display_value("ClientTheme", setting), json!("#aabbcc"));
    }

    #[test]
    fn updates_for_unknown_plugins_are_ignored() {
        let (plugins, always_on) = catalog();
        let mut store = SelectionStore::initialize(&plugins, &always_on);

        store.set_enabled("Ghost", true);
        store.set_override("Ghost", "x", json!(1));

        assert_eq!(store.selections().len(), 2);
        assert!(!store.is_enabled("Ghost"));
    }
}
