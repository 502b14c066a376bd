//! Error kinds surfaced by the translation engine.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The configured catalog root does not exist.
    #[error("locale directory '{}' does not exist", path.display())]
    LocaleRootMissing { path: PathBuf },

    /// No parseable catalog was found for a locale.
    #[error("unable to find a translation catalog for '{locale}'")]
    CatalogMissing { locale: String },

    #[error("file type not supported: {file_type}")]
    UnsupportedFileType { file_type: String },

    /// A lookup was requested without any source text.
    #[error("unable to translate an empty source string")]
    EmptySourceString,

    /// The transformer reached end of input without ever receiving an item.
    #[error("no input received: nothing was translated")]
    NoInputReceived,

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranslateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TranslateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;
