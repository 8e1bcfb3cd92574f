use thiserror::Error;

/// Errors raised by the network engine and its persistence codec.
///
/// Each failure is reported at the call that caused it; nothing is retried
/// or recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// An input, target or weight matrix does not have the shape the
    /// network is configured for.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The name is not one of the built-in activation functions.
    #[error("unknown activation function: {0:?}")]
    UnknownActivation(String),

    /// A persisted buffer or object does not describe a valid network.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl NetworkError {
    pub(crate) fn dimension(context: &'static str, expected: usize, actual: usize) -> Self {
        NetworkError::DimensionMismatch { context, expected, actual }
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
