/// Error types specific to catalog loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog asset '{asset}' failed to parse: {source}")]
    Parse {
        asset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog asset '{asset}' could not be read: {source}")]
    Read {
        asset: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate plugin identifier '{name}'")]
    DuplicatePlugin { name: String },

    #[error("duplicate setting '{setting}' on plugin '{plugin}'")]
    DuplicateSetting { plugin: String, setting: String },

    #[error("plugin '{plugin}': select setting '{setting}' defaults to '{default}', which is not among its options")]
    DefaultNotInOptions { plugin: String, setting: String, default: String },

    #[error("duplicate theme identifier '{id}'")]
    DuplicateTheme { id: String },
}
