/// Error types specific to the assembler feature.
///
/// Document assembly itself is infallible; only serialization can fail.
#[derive(Debug, thiserror::Error)]
pub enum AssemblerError {
    #[error("failed to serialize configuration document: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}
