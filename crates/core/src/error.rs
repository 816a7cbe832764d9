use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum FaceError {
    #[error("config error: {0}")]
    Config(String),

    #[error("companion channel error: {0}")]
    Companion(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

// Lets `?` pass through draw targets whose error type is `Infallible`.
impl From<std::convert::Infallible> for FaceError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T, E = FaceError> = std::result::Result<T, E>;
