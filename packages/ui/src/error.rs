use thiserror::Error;

/// Failures of the durable preference backend. Always recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}` from storage")]
    Read { key: String },
    #[error("failed to write `{key}` to storage")]
    Write { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("unknown language code `{0}`, expected `ro` or `en`")]
    UnknownLanguage(String),
    #[error("language requested outside of an I18nProvider")]
    MissingProvider,
}
