//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum DqnError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// Sampling more transitions than the replay buffer holds.
    #[error("Replay buffer underflow: requested {batch_size} transitions from {len}")]
    ReplayBufferUnderflow {
        /// The number of transitions in the buffer.
        len: usize,

        /// The requested batch size.
        batch_size: usize,
    },

    /// A frame with an unexpected shape was given to a preprocessor.
    #[error("Invalid frame shape: {0:?}")]
    InvalidFrameShape(Vec<usize>),

    /// An action outside of the action space.
    #[error("Invalid action {act}, the number of actions is {n}")]
    InvalidAction {
        /// The given action.
        act: usize,

        /// The number of actions.
        n: usize,
    },

    /// A size that must be positive is zero.
    #[error("{0} must be positive")]
    ZeroSize(&'static str),
}
