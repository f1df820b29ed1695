//! Crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Select at least one character category")]
    NoCategories,

    #[error("Generate a password before copying")]
    EmptyPassword,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Length {0} exceeds the maximum of {max}", max = crate::pass::MAX_LENGTH)]
    LengthTooLarge(usize),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Missing value for {0}")]
    MissingValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
