use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("contact with id {0} not found")]
    NotFound(i64),

    #[error("contact store is corrupt: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("contact store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("contact ids exhausted")]
    IdsExhausted,

    #[error("invalid contact: {0}")]
    Validation(String),

    #[error("contacts api request failed: {0}")]
    Transport(String),
}

impl ContactError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContactError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
