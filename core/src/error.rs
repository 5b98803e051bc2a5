use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown income bracket '{label}'")]
    UnknownBracket { label: String },

    #[error("Unknown party '{party}'")]
    UnknownParty { party: String },

    #[error("Cannot select income bracket '{label}': not a recognized bracket")]
    InvalidBracket { label: String },

    #[error("Invalid dataset: {reason}")]
    InvalidDataset { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QueryError {
    pub(crate) fn invalid_dataset(reason: impl Into<String>) -> Self {
        Self::InvalidDataset { reason: reason.into() }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
