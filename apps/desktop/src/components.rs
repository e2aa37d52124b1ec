//! UI components: search, bulk actions, theme picker, the category-grouped
//! plugin grid with per-kind setting editors, and the generator panel.
//!
//! Components never mutate selection state directly; every change goes
//! through the [`SelectionStore`] API so the rules (required plugins stay
//! on, unknown ids are ignored) hold no matter which widget fired.

use crate::app::AppState;
use dioxus::prelude::*;
use fxhash::FxHashSet;
use serde_json::Value;
use vencfg::domain::catalog::{CategoryInfo, PluginDescriptor, SettingDescriptor, SettingSpec};
use vencfg::domain::constants::CONFIG_FILE_NAME;
use vencfg::selection::SelectionStore;

#[component]
pub fn SearchBar(mut query: Signal<String>) -> Element {
    rsx! {
        input {
            class: "search",
            r#type: "search",
            placeholder: "Search plugins...",
            value: "{query}",
            oninput: move |evt| query.set(evt.value()),
        }
    }
}

#[component]
pub fn BulkActions(mut store: Signal<SelectionStore>) -> Element {
    let state = use_context::<AppState>();
    let none_state = state.clone();
    let suggest_state = state;

    rsx! {
        div { class: "bulk-actions",
            button {
                onclick: move |_| store.write().select_all(),
                "Select all"
            }
            button {
                onclick: move |_| store.write().select_none(none_state.catalog.required()),
                "Select none"
            }
            button {
                onclick: move |_| {
                    let ids: FxHashSet<String> =
                        suggest_state.suggested.plugins.iter().cloned().collect();
                    store.write().select_suggested(
                        suggest_state.catalog.plugins(),
                        suggest_state.catalog.required(),
                        &ids,
                        suggest_state.suggested.theme.as_deref(),
                    );
                },
                "Select suggested"
            }
        }
    }
}

#[component]
pub fn ThemePicker(mut store: Signal<SelectionStore>) -> Element {
    let state = use_context::<AppState>();
    let selected = store.read().selected_theme().map(str::to_owned);

    rsx! {
        section { class: "theme-picker",
            h2 { "Theme" }
            select {
                oninput: move |evt| {
                    let value = evt.value();
                    store.write().select_theme(if value.is_empty() { None } else { Some(value) });
                },
                option { value: "", selected: selected.is_none(), "No theme" }
                for theme in state.catalog.themes().iter().cloned() {
                    option {
                        key: "{theme.id}",
                        value: "{theme.id}",
                        selected: selected.as_deref() == Some(theme.id.as_str()),
                        "{theme.name} by {theme.author}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategorySection(
    category: CategoryInfo,
    plugins: Vec<PluginDescriptor>,
    store: Signal<SelectionStore>,
) -> Element {
    rsx! {
        section { class: "category",
            h2 { "{category.name}" }
            p { class: "category-description", "{category.description}" }
            div { class: "plugin-grid",
                for plugin in plugins {
                    PluginCard { key: "{plugin.name}", plugin, store }
                }
            }
        }
    }
}

#[component]
fn PluginCard(plugin: PluginDescriptor, mut store: Signal<SelectionStore>) -> Element {
    let enabled = store.read().is_enabled(&plugin.name);
    let name = plugin.name.clone();
    let card_class = if enabled { "plugin-card enabled" } else { "plugin-card" };

    rsx! {
        article { class: "{card_class}",
            header {
                label {
                    input {
                        r#type: "checkbox",
                        checked: enabled,
                        disabled: plugin.required,
                        oninput: move |evt| store.write().set_enabled(&name, evt.checked()),
                    }
                    strong { "{plugin.name}" }
                    if plugin.required {
                        span { class: "badge", "required" }
                    }
                }
                span { class: "author", "by {plugin.author}" }
            }
            p { class: "description", "{plugin.description}" }
            if enabled && !plugin.settings.is_empty() {
                div { class: "settings",
                    for setting in plugin.settings.clone() {
                        SettingEditor {
                            key: "{setting.name}",
                            plugin_name: plugin.name.clone(),
                            setting,
                            store,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SettingEditor(
    plugin_name: String,
    setting: SettingDescriptor,
    mut store: Signal<SelectionStore>,
) -> Element {
    let current = store.read().display_value(&plugin_name, &setting);
    let plugin = plugin_name.clone();
    let name = setting.name.clone();

    let editor = match setting.spec.clone() {
        SettingSpec::Checkbox { .. } => rsx! {
            input {
                r#type: "checkbox",
                checked: matches!(current, Value::Bool(true)),
                oninput: move |evt| {
                    store.write().set_override(&plugin, &name, Value::Bool(evt.checked()));
                },
            }
        },
        SettingSpec::Text { .. } => rsx! {
            input {
                r#type: "text",
                value: text_of(&current),
                oninput: move |evt| {
                    store.write().set_override(&plugin, &name, Value::String(evt.value()));
                },
            }
        },
        SettingSpec::Number { min, max, step, .. } => rsx! {
            input {
                r#type: "number",
                value: text_of(&current),
                min: min.map(|v| v.to_string()),
                max: max.map(|v| v.to_string()),
                step: step.map(|v| v.to_string()),
                oninput: move |evt| {
                    store.write().set_override(&plugin, &name, Value::String(evt.value()));
                },
            }
        },
        SettingSpec::Color { .. } => rsx! {
            input {
                r#type: "color",
                value: text_of(&current),
                oninput: move |evt| {
                    store.write().set_override(&plugin, &name, Value::String(evt.value()));
                },
            }
        },
        SettingSpec::Select { options, .. } => {
            let selected = text_of(&current);
            rsx! {
                select {
                    oninput: move |evt| {
                        store.write().set_override(&plugin, &name, Value::String(evt.value()));
                    },
                    for option in options {
                        option {
                            key: "{option.value}",
                            value: "{option.value}",
                            selected: option.value == selected,
                            "{option.label}"
                        }
                    }
                }
            }
        }
    };

    let description = setting.description.clone().unwrap_or_default();

    rsx! {
        div { class: "setting",
            label { "{setting.label}" }
            {editor}
            if !description.is_empty() {
                small { "{description}" }
            }
        }
    }
}

#[component]
pub fn GeneratorPanel(store: Signal<SelectionStore>) -> Element {
    let state = use_context::<AppState>();
    let mut status = use_signal(String::new);

    let save_state = state.clone();
    let mut save_status = status;
    let copy_state = state;

    rsx! {
        footer { class: "generator",
            button {
                class: "primary",
                onclick: move |_| {
                    let message = match vencfg::generate(&save_state.catalog, &store.read()) {
                        Ok(json) => match std::fs::write(CONFIG_FILE_NAME, &json) {
                            Ok(()) => format!("Saved {CONFIG_FILE_NAME}"),
                            Err(err) => {
                                tracing::error!(%err, "failed to write config file");
                                format!("Could not write {CONFIG_FILE_NAME}: {err}")
                            }
                        },
                        Err(err) => {
                            tracing::error!(%err, "failed to assemble config");
                            format!("Could not generate config: {err}")
                        }
                    };
                    save_status.set(message);
                },
                "Save {CONFIG_FILE_NAME}"
            }
            button {
                onclick: move |_| {
                    let message = match vencfg::generate(&copy_state.catalog, &store.read()) {
                        Ok(json) => match copy_to_clipboard(json) {
                            Ok(()) => "Copied to clipboard".to_owned(),
                            Err(err) => {
                                tracing::error!(%err, "clipboard copy failed");
                                format!("Could not copy: {err}")
                            }
                        },
                        Err(err) => {
                            tracing::error!(%err, "failed to assemble config");
                            format!("Could not generate config: {err}")
                        }
                    };
                    status.set(message);
                },
                "Copy to clipboard"
            }
            span { class: "status", "{status}" }
        }
    }
}

fn copy_to_clipboard(text: String) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text)
}

/// The plain-text form of a raw scalar, as input widgets want it.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
