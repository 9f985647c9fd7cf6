use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to decode clipboard format `{format}`: {reason}")]
    FormatDecode { format: String, reason: String },

    #[error(transparent)]
    Hashing(#[from] HashError),
}

#[derive(Debug, Error)]
pub enum HashError {
    #[error("failed to encode content for hashing: {0}")]
    Encoding(String),
}
