use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown colour scale '{0}'")]
    UnknownScale(String),

    #[error("malformed colour scale '{scale}': {reason}")]
    MalformedStops { scale: String, reason: String },

    #[error("colour scale '{name}' in {path:?} clashes with the one from {existing}")]
    DuplicateScale {
        name: String,
        existing: String,
        path: PathBuf,
    },

    #[error("invalid colour '{0}'")]
    InvalidColor(String),

    #[error("failed to read scale file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scale file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl ScaleError {
    pub(crate) fn malformed(scale: &str, reason: impl Into<String>) -> Self {
        ScaleError::MalformedStops {
            scale: scale.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScaleError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
