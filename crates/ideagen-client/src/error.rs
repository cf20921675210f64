//! Failure modes of a generation request
//!
//! The service itself can refuse a request by answering with an `error` field;
//! everything else that goes wrong between sending the request and decoding
//! the answer is a transport-level problem. Callers usually only care about
//! that split, which [`ClientError::is_application`] exposes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Application(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

impl ClientError {
    pub fn is_application(&self) -> bool {
        matches!(self, ClientError::Application(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
