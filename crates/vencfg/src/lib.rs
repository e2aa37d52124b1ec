//! Facade crate for the Vencord configuration generator.
//! Re-exports domain primitives and the feature crates, and offers the
//! one-call generation pipeline used by applications.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use vencfg_assembler as assembler;
pub use vencfg_catalog as catalog;
pub use vencfg_domain as domain;
pub use vencfg_selection as selection;

use vencfg_assembler::{AssemblerError, VencordConfig};
use vencfg_catalog::Catalog;
use vencfg_selection::SelectionStore;

/// Assembles the full document from the catalog and the current selection
/// state: baseline, selection overlay, theme.
#[must_use]
pub fn generate_document(catalog: &Catalog, store: &SelectionStore) -> VencordConfig {
    let baseline = assembler::build_baseline(catalog.plugins(), catalog.required());
    let doc = assembler::apply_selections(
        &baseline,
        catalog.plugins(),
        store.selections(),
        catalog.required(),
    );
    assembler::apply_theme(&doc, store.selected_theme(), catalog.themes())
}

/// Assembles and serializes the document to the exported JSON text.
///
/// # Errors
/// Returns [`AssemblerError`] if serialization fails.
pub fn generate(catalog: &Catalog, store: &SelectionStore) -> Result<String, AssemblerError> {
    assembler::to_pretty_json(&generate_document(catalog, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use vencfg_selection::SelectionStore;

    #[test]
    fn pipeline_runs_against_embedded_catalog() {
        let catalog = Catalog::load_embedded().unwrap();
        let mut store = SelectionStore::initialize(catalog.plugins(), catalog.required());
        store.set_enabled("ClientTheme", true);
        store.select_theme(Some("ClearVision".into()));

        let doc = generate_document(&catalog, &store);
        assert!(doc.settings.plugins.get("ClientTheme").unwrap().enabled);
        assert_eq!(doc.settings.theme_links.len(), 1);

        // Required plugins are always enabled, whatever the store says.
        let suggested: FxHashSet<String> = FxHashSet::default();
        store.select_suggested(catalog.plugins(), catalog.required(), &suggested, None);
        let doc = generate_document(&catalog, &store);
        assert!(doc.settings.plugins.get("NoTrack").unwrap().enabled);

        let json = generate(&catalog, &store).unwrap();
        assert!(json.contains("\"plugins\""));
    }
}
