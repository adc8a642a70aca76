//! Error types for the Spoonacular client.
//!
//! Every dispatched call ends in exactly one of these outcomes, so callers can
//! tell "the upstream said no" apart from "we never got an answer" and from
//! "we refused to spend quota".

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::client::types::ApiResponse;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad client settings (empty key, bad header value, bad base URL) or an
    /// identifier that cannot be used as a path segment.
    #[error("configuration error: {0}")]
    Config(String),

    /// The local quota guard refused the call before it reached the network.
    #[error("quota exhausted: only {remaining} '{category}' calls remaining (threshold {threshold})")]
    QuotaExhausted {
        category: String,
        remaining: i64,
        threshold: i64,
    },

    #[error("request to {path} timed out after {timeout:?}")]
    Timeout { path: String, timeout: Duration },

    /// The upstream answered with a non-2xx status. The full response is kept.
    #[error("upstream returned {status} for {path}")]
    Http {
        status: StatusCode,
        path: String,
        response: Box<ApiResponse>,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request parameters: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Returns a short hint for how an operator might resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::Config(_) => Some("Check the API key and base URL passed to the client"),
            Error::QuotaExhausted { .. } => {
                Some("Wait for the daily quota to reset or enable allow_extra_calls")
            }
            Error::Timeout { .. } => Some("Check your internet connection or raise the timeout"),
            Error::Http { status, .. } if *status == StatusCode::UNAUTHORIZED => {
                Some("The API key was rejected by the upstream service")
            }
            Error::Http { status, .. } if *status == StatusCode::PAYMENT_REQUIRED => {
                Some("The upstream quota is used up for today")
            }
            Error::Http { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS => {
                Some("Too many requests, raise the sleep interval")
            }
            _ => None,
        }
    }

    /// The upstream response, when the error carries one.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Error::Http { response, .. } => Some(response),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
