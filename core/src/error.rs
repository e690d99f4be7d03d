//! Error types for the proxy API client.
//!
//! # Design
//! Session-validation failures each get a dedicated variant because they are
//! raised at different points in a request's life: `MissingAccessKey` at
//! construction, `MissingUser` / `MissingProxy` at send time when default
//! parameters are attached. Network failures are wrapped untouched in
//! `Transport`; HTTP status codes are never an error at this layer, and a
//! response body that fails to decode is not an error at all (see
//! [`Decoded`](crate::decode::Decoded)).

use std::fmt;

/// Errors returned while building or sending a request.
#[derive(Debug)]
pub enum ClientError {
    /// No access key is configured on the session. Raised when a request is
    /// constructed, before anything touches the network.
    MissingAccessKey,

    /// Default parameters are enabled but the session has no username.
    MissingUser,

    /// Default parameters are enabled but the session has no proxy value.
    MissingProxy,

    /// The request was already sent. Descriptors are single-use: a second
    /// `send`, or any mutation after the first, reports this.
    AlreadySent,

    /// A network-level failure (DNS, connection refused, timeout) from the
    /// underlying HTTP agent.
    Transport(ureq::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MissingAccessKey => {
                write!(f, "an access key must be set before building requests")
            }
            ClientError::MissingUser => {
                write!(f, "a user must be set before default parameters can be attached")
            }
            ClientError::MissingProxy => {
                write!(f, "a proxy must be set before default parameters can be attached")
            }
            ClientError::AlreadySent => {
                write!(f, "request already sent; build a new request to retry")
            }
            ClientError::Transport(err) => {
                write!(f, "transport failed: {err}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
