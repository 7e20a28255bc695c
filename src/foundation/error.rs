use std::path::PathBuf;

/// Convenience result type used across appicon.
pub type IconResult<T> = Result<T, IconError>;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Input rejected before any rendering happened.
    #[error("validation error: {0}")]
    Validation(String),

    /// PNG encoding failed or a pixel buffer disagreed with its dimensions.
    #[error("encode error: {0}")]
    Encode(String),

    /// Writing an output file failed.
    #[error("write '{}': {source}", path.display())]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IconError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IconError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
