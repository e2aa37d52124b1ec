use std::borrow::Cow;

/// Error types specific to logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid logger configuration: {message}")]
    InvalidConfiguration { message: Cow<'static, str> },

    #[error("failed to install global subscriber: {source}")]
    Subscriber {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },

    #[error("failed to build rolling file appender: {source}")]
    Appender {
        #[from]
        source: tracing_appender::rolling::InitError,
    },

    #[error("failed to prepare log directory: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
