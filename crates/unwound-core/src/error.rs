//! Error types for unwound

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwoundError {
    #[error("Unknown pitch: {0}")]
    UnknownPitch(String),
    #[error("Unknown scale family: {0}")]
    UnknownScaleFamily(String),
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),
}

pub type Result<T> = std::result::Result<T, UnwoundError>;
