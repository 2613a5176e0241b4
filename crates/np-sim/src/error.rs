use np_core::CoreError;
use np_transmit::TransmitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match node count {expected}")]
    NodeCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{count} nodes exceed the NodeId limit of {max}")]
    TooManyNodes { count: usize, max: usize },

    #[error("transmission error: {0}")]
    Transmit(#[from] TransmitError),
}

pub type SimResult<T> = Result<T, SimError>;
