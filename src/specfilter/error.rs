use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecFilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Query error at position {position}: {message}")]
    Query { position: usize, message: String },

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Attribute '{0}' cannot be filtered on")]
    NotFilterable(String),

    #[error("Invalid value '{value}' for attribute '{attr}'")]
    InvalidValue { attr: String, value: String },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SpecFilterError>;
