#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("mapping file {path} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to parse XML document {path}: {message}")]
    DocumentParse { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::SourceNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }

    pub(crate) fn document_parse(
        path: impl Into<PathBuf>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::DocumentParse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
