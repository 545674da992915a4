use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidId { kind: &'static str, raw: String },
    InvalidState(String),
    InvalidMediaFormat(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId { kind, raw } => {
                write!(f, "invalid {kind} id: {raw:?}")
            }
            ModelError::InvalidState(raw) => {
                write!(f, "invalid video state: {raw:?}")
            }
            ModelError::InvalidMediaFormat(raw) => {
                write!(f, "invalid media format: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
