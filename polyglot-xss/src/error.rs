use thiserror::Error;

#[derive(Error, Debug)]
pub enum XssError {
    #[error("Sanitization failed: {0}")]
    SanitizationFailed(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] std::io::Error),

    #[error("Sanitized output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, XssError>;
