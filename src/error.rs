use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while producing artifacts. `analyze` never lets these
/// escape; they become a degraded outcome carrying the display text.
#[derive(Debug, Error)]
pub enum PitchError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("chart rendering failed for {path}: {message}")]
    Chart { path: PathBuf, message: String },
    #[error("font error: {0}")]
    Font(String),
    #[error("PDF generation failed for {path}: {message}")]
    Pdf { path: PathBuf, message: String },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PitchError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn chart(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Chart {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn pdf(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Pdf {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
