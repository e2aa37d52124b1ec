//! # Plugin Catalog
//!
//! Ships the static plugin/theme catalog as embedded JSON assets, parses and
//! validates it once at startup, and answers lookups for the rest of the
//! workspace. The catalog is immutable after loading.
//!
//! The *suggested selection* (the set applied by the "select suggested" bulk
//! operation) is deliberately data, not code: it lives in
//! `assets/suggested.json` and can be replaced without touching the crates.

mod error;

pub use crate::error::CatalogError;

use fxhash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use vencfg_domain::catalog::{CategoryInfo, PluginDescriptor, SettingSpec, ThemeOption};
use vencfg_domain::constants::MISC_CATEGORY;

const PLUGINS_ASSET: &str = "plugins.json";
const CATEGORIES_ASSET: &str = "categories.json";
const THEMES_ASSET: &str = "themes.json";
const SUGGESTED_ASSET: &str = "suggested.json";

const PLUGINS_JSON: &str = include_str!("../assets/plugins.json");
const CATEGORIES_JSON: &str = include_str!("../assets/categories.json");
const THEMES_JSON: &str = include_str!("../assets/themes.json");
const SUGGESTED_JSON: &str = include_str!("../assets/suggested.json");

/// The validated, immutable plugin/theme catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    plugins: Vec<PluginDescriptor>,
    categories: Vec<CategoryInfo>,
    themes: Vec<ThemeOption>,
    required: FxHashSet<String>,
}

impl Catalog {
    /// Loads and validates the embedded catalog assets.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if an asset fails to parse or violates a
    /// catalog invariant (duplicate ids, select default outside its
    /// options).
    pub fn load_embedded() -> Result<Self, CatalogError> {
        let plugins: Vec<PluginDescriptor> = parse_asset(PLUGINS_ASSET, PLUGINS_JSON)?;
        let categories: Vec<CategoryInfo> = parse_asset(CATEGORIES_ASSET, CATEGORIES_JSON)?;
        let themes: Vec<ThemeOption> = parse_asset(THEMES_ASSET, THEMES_JSON)?;
        Self::from_parts(plugins, categories, themes)
    }

    /// Loads the catalog from a directory holding the same asset files as
    /// the embedded set, overriding the shipped catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if an asset cannot be read, fails to parse,
    /// or violates a catalog invariant.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let plugins: Vec<PluginDescriptor> = parse_file(dir, PLUGINS_ASSET)?;
        let categories: Vec<CategoryInfo> = parse_file(dir, CATEGORIES_ASSET)?;
        let themes: Vec<ThemeOption> = parse_file(dir, THEMES_ASSET)?;
        Self::from_parts(plugins, categories, themes)
    }

    /// Builds a catalog from already-parsed descriptors, validating them.
    ///
    /// # Errors
    /// See [`Catalog::load_embedded`].
    pub fn from_parts(
        plugins: Vec<PluginDescriptor>,
        categories: Vec<CategoryInfo>,
        themes: Vec<ThemeOption>,
    ) -> Result<Self, CatalogError> {
        validate_plugins(&plugins)?;
        validate_themes(&themes)?;

        let known: FxHashSet<&str> = categories.iter().map(|c| c.key.as_str()).collect();
        for plugin in &plugins {
            if !known.contains(plugin.category.as_str()) {
                tracing::warn!(
                    plugin = %plugin.name,
                    category = %plugin.category,
                    "unknown category key, plugin will be grouped under '{MISC_CATEGORY}'"
                );
            }
        }

        let required = plugins
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.clone())
            .collect::<FxHashSet<_>>();

        tracing::debug!(
            plugins = plugins.len(),
            required = required.len(),
            themes = themes.len(),
            "catalog loaded"
        );

        Ok(Self { plugins, categories, themes, required })
    }

    /// All plugin descriptors in declaration order.
    #[must_use]
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Looks up a plugin by identifier.
    #[must_use]
    pub fn plugin(&self, name: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|p| p.name == name)
    }

    /// All category descriptors in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// All theme options in declaration order.
    #[must_use]
    pub fn themes(&self) -> &[ThemeOption] {
        &self.themes
    }

    /// Looks up a theme by identifier.
    #[must_use]
    pub fn theme(&self, id: &str) -> Option<&ThemeOption> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Identifiers of always-on plugins.
    #[must_use]
    pub const fn required(&self) -> &FxHashSet<String> {
        &self.required
    }

    /// Whether the named plugin is always-on.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Plugins matching a case-insensitive substring query.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&PluginDescriptor> {
        self.plugins.iter().filter(|p| p.matches_query(query)).collect()
    }

    /// Groups the plugins matching `query` by category, in category
    /// declaration order. Plugins with an unknown category key land in the
    /// trailing `misc` bucket.
    #[must_use]
    pub fn grouped(&self, query: &str) -> Vec<(&CategoryInfo, Vec<&PluginDescriptor>)> {
        let matching = self.search(query);
        let mut groups = Vec::new();
        for category in &self.categories {
            let members: Vec<&PluginDescriptor> = matching
                .iter()
                .copied()
                .filter(|p| {
                    p.category == category.key
                        || (category.key == MISC_CATEGORY && !self.has_category(&p.category))
                })
                .collect();
            if !members.is_empty() {
                groups.push((category, members));
            }
        }
        groups
    }

    fn has_category(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c.key == key)
    }
}

/// The externally-configured suggested selection: plugin ids to enable and
/// the theme to pick when the user asks for the recommended setup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestedSelection {
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

impl SuggestedSelection {
    /// Loads the embedded suggested-selection asset.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] if the asset is malformed.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        parse_asset(SUGGESTED_ASSET, SUGGESTED_JSON)
    }

    /// Loads the suggested selection from a catalog override directory. A
    /// missing file means no suggestions, not an error.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        if dir.join(SUGGESTED_ASSET).exists() {
            parse_file(dir, SUGGESTED_ASSET)
        } else {
            Ok(Self::default())
        }
    }
}

fn parse_asset<T: serde::de::DeserializeOwned>(
    asset: &'static str,
    raw: &str,
) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { asset, source })
}

fn parse_file<T: serde::de::DeserializeOwned>(
    dir: &Path,
    asset: &'static str,
) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(dir.join(asset))
        .map_err(|source| CatalogError::Read { asset, source })?;
    parse_asset(asset, &raw)
}

fn validate_plugins(plugins: &[PluginDescriptor]) -> Result<(), CatalogError> {
    let mut seen = FxHashSet::default();
    for plugin in plugins {
        if !seen.insert(plugin.name.as_str()) {
            return Err(CatalogError::DuplicatePlugin { name: plugin.name.clone() });
        }

        let mut setting_names = FxHashSet::default();
        for setting in &plugin.settings {
            if !setting_names.insert(setting.name.as_str()) {
                return Err(CatalogError::DuplicateSetting {
                    plugin: plugin.name.clone(),
                    setting: setting.name.clone(),
                });
            }
            if let SettingSpec::Select { default, options } = &setting.spec {
                if !options.iter().any(|o| &o.value == default) {
                    return Err(CatalogError::DefaultNotInOptions {
                        plugin: plugin.name.clone(),
                        setting: setting.name.clone(),
                        default: default.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn validate_themes(themes: &[ThemeOption]) -> Result<(), CatalogError> {
    let mut seen = FxHashSet::default();
    for theme in themes {
        if !seen.insert(theme.id.as_str()) {
            return Err(CatalogError::DuplicateTheme { id: theme.id.clone() });
        }
    }
    Ok(())
}
