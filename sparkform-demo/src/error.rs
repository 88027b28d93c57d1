//! Errors surfaced by the demo binary.

use sparkform::FormError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file '{path}'")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Form(#[from] FormError),
}
