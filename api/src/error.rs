// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised before a response from the backend could be read.
///
/// A response with a non-success status is *not* an error at this layer; it is
/// returned as an [`ApiResponse`](crate::ApiResponse) for the caller to interpret.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection, DNS or body transfer failure.
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// The request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
