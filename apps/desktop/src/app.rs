//! Application state and the root component.

use crate::components::{BulkActions, CategorySection, GeneratorPanel, SearchBar, ThemePicker};
use dioxus::prelude::*;
use std::sync::Arc;
use vencfg::catalog::{Catalog, CatalogError, SuggestedSelection};
use vencfg::selection::SelectionStore;

const APP_CSS: &str = include_str!("../assets/app.css");

/// Immutable data shared with every component via the root context.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub suggested: Arc<SuggestedSelection>,
}

impl AppState {
    /// Loads and validates the catalog: the override directory when one is
    /// configured, the embedded assets otherwise.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if an asset is missing or malformed.
    pub fn load(catalog_dir: Option<&std::path::Path>) -> Result<Self, CatalogError> {
        let (catalog, suggested) = match catalog_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "loading catalog override");
                (Catalog::load_from_dir(dir)?, SuggestedSelection::load_from_dir(dir)?)
            }
            None => (Catalog::load_embedded()?, SuggestedSelection::load_embedded()?),
        };
        Ok(Self { catalog: Arc::new(catalog), suggested: Arc::new(suggested) })
    }
}

/// Root component: owns the selection state and the search query, and lays
/// out the theme picker, the category-grouped plugin grid, and the
/// generator panel.
#[component]
pub fn App() -> Element {
    let state = use_context::<AppState>();
    let store = {
        let catalog = Arc::clone(&state.catalog);
        use_signal(move || SelectionStore::initialize(catalog.plugins(), catalog.required()))
    };
    let query = use_signal(String::new);

    let groups: Vec<_> = state
        .catalog
        .grouped(&query.read())
        .into_iter()
        .map(|(category, plugins)| {
            (category.clone(), plugins.into_iter().cloned().collect::<Vec<_>>())
        })
        .collect();

    rsx! {
        style { {APP_CSS} }
        div { class: "layout",
            header { class: "topbar",
                h1 { "Vencord Config Generator" }
                SearchBar { query }
                BulkActions { store }
            }
            main { class: "content",
                ThemePicker { store }
                if groups.is_empty() {
                    p { class: "empty", "No plugins match \"{query}\"." }
                }
                for (category, plugins) in groups {
                    CategorySection {
                        key: "{category.key}",
                        category,
                        plugins,
                        store,
                    }
                }
            }
            GeneratorPanel { store }
        }
    }
}
