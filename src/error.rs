// src/error.rs

use reqwest::StatusCode;

/// Why a poll cycle could not confirm the server is up.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("HTTP {0}")]
    Http(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Connect failures, body read failures and undecodable bodies all land here.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A `null` body has no fields to read.
    #[error("health body is JSON null")]
    NullBody,
}

impl From<reqwest::Error> for PollError {
    fn from(e: reqwest::Error) -> Self {
        PollError::Transport(TransportError::Request(e))
    }
}
