//! Error types for the Mineplex stats client
//!
//! Only structural problems (bad endpoint names, wrong argument counts,
//! missing platform) and transport failures are errors. An unrecognised
//! or empty leaderboard page is reported as `Ok(None)` by the scraper.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MineplexError>;

#[derive(Error, Debug)]
pub enum MineplexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument count ({supplied}) for endpoint url {template}, expected {expected}")]
    ArgumentCountMismatch {
        template: String,
        expected: usize,
        supplied: usize,
    },

    #[error("Invalid or missing platform type {platform} specified")]
    UnknownPlatform { platform: String },

    #[error("Cannot create an endpoint from an undefined platform")]
    MissingPlatform,

    #[error("Invalid endpoint type {kind}")]
    UnknownEndpointType { kind: String },

    #[error("Invalid endpoint provided. Endpoint {kind} does not have method {method}()")]
    UnknownEndpointMethod { kind: String, method: String },

    #[error("Endpoint option `{field}` is required but was not provided")]
    MissingOption { field: String },

    #[error("Unknown {kind}: {value}")]
    InvalidName { kind: &'static str, value: String },
}
