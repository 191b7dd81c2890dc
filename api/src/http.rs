// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper sending JSON and reading whole responses.

use reqwest::{Client, Method, RequestBuilder};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::ApiResponse;

const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP client for backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Builds a request carrying a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized.
    pub fn build_json_request<T: serde::Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &T,
    ) -> Result<RequestBuilder, ApiError> {
        let body = serde_json::to_vec(body)?;
        Ok(self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(reqwest::header::ACCEPT, CONTENT_TYPE_JSON)
            .body(body))
    }

    /// Sends a request and reads the full response.
    ///
    /// Any status code is returned as a response; only transport-level
    /// failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be read.
    pub async fn execute(&self, req: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        tracing::debug!(status, "received response");

        let text = resp.text().await?;
        Ok(ApiResponse::new(status, &text))
    }
}
