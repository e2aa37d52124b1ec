use fxhash::{FxHashMap, FxHashSet};
use serde_json::json;
use vencfg_assembler::{apply_selections, apply_theme, build_baseline, to_pretty_json};
use vencfg_domain::catalog::{PluginDescriptor, ThemeOption};
use vencfg_domain::value::SettingValue;
use vencfg_selection::{PluginSelection, SelectionMap};

/// Catalog from the reference scenario: `A` is always-on with no settings,
/// `B` is optional with one boolean setting `x` defaulting to `false`.
fn scenario_catalog() -> (Vec<PluginDescriptor>, FxHashSet<String>) {
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

fn selection(enabled: bool, overrides: &[(&str, serde_json::Value)]) -> PluginSelection {
    PluginSelection {
        enabled,
        overrides: overrides.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect(),
    }
}

fn themes() -> Vec<ThemeOption> {
    serde_json::from_value(json!([
        { "id": "R1", "name": "R1", "author": "a",
          "previewUrl": "https://example.com/preview",
          "downloadUrl": "https://example.com/r1.css" }
    ]))
    .unwrap()
}

#[test]
fn baseline_has_one_entry_per_plugin_with_defaults() {
    let (plugins, always_on) = scenario_catalog();
    let doc = build_baseline(&plugins, &always_on);

    assert_eq!(doc.settings.plugins.len(), 2);
    let a = doc.settings.plugins.get("A").unwrap();
    assert!(a.enabled);
    assert!(a.values.is_empty());

    let b = doc.settings.plugins.get("B").unwrap();
    assert!(!b.enabled);
    assert_eq!(b.value("x"), Some(&SettingValue::Bool(false)));
}

#[test]
fn baseline_of_empty_catalog_is_empty() {
    let doc = build_baseline(&[], &FxHashSet::default());
    assert!(doc.settings.plugins.is_empty());
    assert!(doc.settings.theme_links.is_empty());
}

#[test]
fn baseline_resolves_settings_location_from_catalog() {
    let plugins: Vec<PluginDescriptor> = serde_json::from_value(json!([
        { "name": "Settings", "description": "", "author": "t", "category": "core",
          "required": true,
          "settings": [{
              "kind": "select", "name": "settingsLocation", "label": "Where:",
              "default": "belowNitro",
              "options": [
                  { "value": "aboveNitro", "label": "Above" },
                  { "value": "belowNitro", "label": "Below" }
              ]
          }] }
    ]))
    .unwrap();
    let always_on = std::iter::once("Settings".to_owned()).collect();

    let doc = build_baseline(&plugins, &always_on);
    let entry = doc.settings.plugins.get("Settings").unwrap();
    assert_eq!(entry.value("settingsLocation"), Some(&SettingValue::Choice("belowNitro".into())));
}

#[test]
fn selections_overlay_enabled_and_overrides() {
    let (plugins, always_on) = scenario_catalog();
    let baseline = build_baseline(&plugins, &always_on);

    let mut selections: SelectionMap = FxHashMap::default();
    selections.insert("B".into(), selection(true, &[("x", json!(true))]));

    let doc = apply_selections(&baseline, &plugins, &selections, &always_on);

    assert!(doc.settings.plugins.get("A").unwrap().enabled);
    let b = doc.settings.plugins.get("B").unwrap();
    assert!(b.enabled);
    assert_eq!(b.value("x"), Some(&SettingValue::Bool(true)));

    // The baseline is untouched.
    assert!(!baseline.settings.plugins.get("B").unwrap().enabled);
}

#[test]
fn always_on_plugins_cannot_be_disabled() {
    let (plugins, always_on) = scenario_catalog();
    let baseline = build_baseline(&plugins, &always_on);

    let mut selections: SelectionMap = FxHashMap::default();
    selections.insert("A".into(), selection(false, &[]));

    let doc = apply_selections(&baseline, &plugins, &selections, &always_on);
    assert!(doc.settings.plugins.get("A").unwrap().enabled);
}

#[test]
fn overrides_on_disabled_plugins_keep_defaults() {
    let (plugins, always_on) = scenario_catalog();
    let baseline = build_baseline(&plugins, &always_on);

    let mut selections: SelectionMap = FxHashMap::default();
    selections.insert("B".into(), selection(false, &[("x", json!(true))]));

    let doc = apply_selections(&baseline, &plugins, &selections, &always_on);
    let b = doc.settings.plugins.get("B").unwrap();
    assert!(!b.enabled);
    assert_eq!(b.value("x"), Some(&SettingValue::Bool(false)));
}

#[test]
fn unknown_plugin_selection_is_dropped() {
    let (plugins, always_on) = scenario_catalog();
    let baseline = build_baseline(&plugins, &always_on);

    let mut selections: SelectionMap = FxHashMap::default();
    selections.insert("Ghost".into(), selection(true, &[("x", json!(true))]));

    let doc = apply_selections(&baseline, &plugins, &selections, &always_on);
    assert_eq!(doc.settings.plugins.len(), 2);
    assert!(!doc.settings.plugins.contains("Ghost"));
}

#[test]
fn apply_selections_is_idempotent() {
    let (plugins, always_on) = scenario_catalog();
    let baseline = build_baseline(&plugins, &always_on);

    let mut selections: SelectionMap = FxHashMap::default();
    selections.insert("B".into(), selection(true, &[("x", json!("yes"))]));
    selections.insert("A".into(), selection(false, &[]));

    let once = apply_selections(&baseline, &plugins, &selections, &always_on);
    let twice = apply_selections(&once, &plugins, &selections, &always_on);
    assert_eq!(once, twice);
}

#[test]
fn numeric_fallback_uses_declared_default() {
    let plugins: Vec<PluginDescriptor> = serde_json::from_value(json!([
        { "name": "N", "description": "", "author": "t", "category": "misc",
          "settings": [
              { "kind": "number", "name": "amount", "label": "Amount:", "default": 5.0 }
          ] }
    ]))
    .unwrap();
    let always_on = FxHashSet::default();
    let baseline = build_baseline(&plugins, &always_on);

    let mut selections: SelectionMap = FxHashMap::default();
    selections.insert("N".into(), selection(true, &[("amount", json!("not-a-number"))]));

    let doc = apply_selections(&baseline, &plugins, &selections, &always_on);
    assert_eq!(
        doc.settings.plugins.get("N").unwrap().value("amount"),
        Some(&SettingValue::Number(5.0))
    );
}

#[test]
fn theme_selection_is_exclusive_and_replaceable() {
    let (plugins, always_on) = scenario_catalog();
    let themes = themes();
    let doc = build_baseline(&plugins, &always_on);

    let with_theme = apply_theme(&doc, Some("R1"), &themes);
    assert_eq!(with_theme.settings.theme_links, vec!["https://example.com/r1.css".to_owned()]);

    // Selecting again never appends.
    let again = apply_theme(&with_theme, Some("R1"), &themes);
    assert_eq!(again.settings.theme_links.len(), 1);

    // Clearing and unknown ids both empty the list.
    let cleared = apply_theme(&with_theme, None, &themes);
    assert!(cleared.settings.theme_links.is_empty());
    let unknown = apply_theme(&with_theme, Some("nope"), &themes);
    assert!(unknown.settings.theme_links.is_empty());
}

#[test]
fn pretty_json_is_indented_and_stable() {
    let (plugins, always_on) = scenario_catalog();
    let doc = build_baseline(&plugins, &always_on);

    let text = to_pretty_json(&doc).unwrap();
    assert!(text.starts_with("{\n    \"settings\""));

    // Plugin keys appear in catalog order.
    let a_pos = text.find("\"A\"").unwrap();
    let b_pos = text.find("\"B\"").unwrap();
    assert!(a_pos < b_pos);

    // Per-plugin keys are exactly the declared settings, enabled first.
    let b_obj = &text[b_pos..];
    let enabled_pos = b_obj.find("\"enabled\"").unwrap();
    let x_pos = b_obj.find("\"x\"").unwrap();
    assert!(enabled_pos < x_pos);

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let b = parsed["settings"]["plugins"]["B"].as_object().unwrap();
    assert_eq!(b.len(), 2, "no extra and no missing keys");
}
