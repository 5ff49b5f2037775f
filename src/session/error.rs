use thiserror::Error;

/// Errors surfaced by the dialogue controller
///
/// All are returned synchronously to the caller of the failing call and
/// never retried internally. A failed call leaves the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The prompt script supplied at session start was empty
    #[error("interview requires at least one prompt")]
    InvalidInput,

    /// The candidate response was blank after trimming; the caller
    /// should re-prompt without losing state
    #[error("response must not be empty")]
    EmptyResponse,

    /// A submission was attempted after the session completed
    #[error("interview session is already completed")]
    SessionClosed,
}
