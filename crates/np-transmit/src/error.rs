use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TransmitError {
    #[error("path of {0} node(s) is too short to animate; need at least 2")]
    PathTooShort(usize),

    #[error("transmission speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),
}

pub type TransmitResult<T> = Result<T, TransmitError>;
