use thiserror::Error;

#[derive(Debug, Error)]
pub enum FgcError {
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("Report persistence failed for {target}: {reason}")]
    PersistenceFailure { target: String, reason: String },

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Unrecognised {field}: '{value}'")]
    InvalidSelection { field: String, value: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FgcError {
    pub(crate) fn invalid_amount(input: &str, reason: impl Into<String>) -> Self {
        FgcError::InvalidAmount {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Wrap any collaborator failure (file I/O, workbook parsing) as a persistence error.
    pub fn persistence(target: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        FgcError::PersistenceFailure {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for FgcError {
    fn from(e: serde_json::Error) -> Self {
        FgcError::SerializationError(e.to_string())
    }
}
