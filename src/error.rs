//! Error types.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors fall into
//! three groups:
//!
//! - **Configuration**: wiring mistakes detected at setup or insertion time
//!   (count mismatches, unsupported variable kinds, operator arity mismatch).
//! - **Protocol**: a single evaluation exchange with an external process
//!   failed. The error carries the request line and the raw response.
//! - **Lifecycle**: the evaluation channel is closed or the process could
//!   not be started.

use std::io;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoeaError>;

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum MoeaError {
    /// Invalid parameters or inconsistent problem wiring.
    #[error("configuration error: {0}")]
    Config(String),

    /// A request/response exchange with an external evaluator failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Evaluation was requested after the channel was closed.
    #[error("evaluation channel is closed")]
    ChannelClosed,

    /// The external evaluator process could not be started.
    #[error("failed to start evaluator process: {0}")]
    Spawn(#[source] io::Error),

    /// Tearing down the evaluator process failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl MoeaError {
    /// Shorthand for a [`MoeaError::Config`] error.
    pub fn config(msg: impl Into<String>) -> Self {
        MoeaError::Config(msg.into())
    }
}

/// Failure of one evaluation exchange on the line protocol.
#[derive(Debug, thiserror::Error)]
#[error("evaluation failed for request `{request}`: {kind}")]
pub struct ProtocolError {
    /// The request line that was sent, without its terminator.
    pub request: String,

    /// The raw response line, if one was received.
    pub response: Option<String>,

    /// What went wrong.
    #[source]
    pub kind: ProtocolErrorKind,
}

/// Classification of a [`ProtocolError`].
#[derive(Debug, thiserror::Error)]
pub enum ProtocolErrorKind {
    /// The evaluator closed its output before answering.
    #[error("end of stream reached when response expected")]
    EndOfStream,

    /// The response had the wrong number of tokens.
    #[error("expected {expected} tokens in response, found {found}")]
    TokenCount { expected: usize, found: usize },

    /// A response token was not a floating-point number.
    #[error("response token `{token}` is not a number")]
    InvalidNumber { token: String },

    /// Reading from or writing to the evaluator failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ProtocolErrorKind {
    /// Returns `true` for [`ProtocolErrorKind::EndOfStream`].
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ProtocolErrorKind::EndOfStream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_message_names_request() {
        let err: MoeaError = ProtocolError {
            request: "0.5 0.5".into(),
            response: None,
            kind: ProtocolErrorKind::EndOfStream,
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("0.5 0.5"), "{msg}");
        assert!(msg.contains("end of stream"), "{msg}");
    }

    #[test]
    fn test_token_count_message() {
        let kind = ProtocolErrorKind::TokenCount {
            expected: 3,
            found: 2,
        };
        assert_eq!(kind.to_string(), "expected 3 tokens in response, found 2");
        assert!(!kind.is_end_of_stream());
    }

    #[test]
    fn test_config_shorthand() {
        let err = MoeaError::config("bad wiring");
        assert!(matches!(err, MoeaError::Config(ref m) if m == "bad wiring"));
        assert_eq!(err.to_string(), "configuration error: bad wiring");
    }
}
