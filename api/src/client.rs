// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the `NextUp` REST endpoints.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{ApiResponse, CreateProjectRequest, LoginRequest, RegisterRequest};

const PATH_CREATE_PROJECT: &str = "/api/projects/create";
const PATH_LOGIN: &str = "/api/auth/login";
const PATH_REGISTER: &str = "/api/auth/register";

/// Client for the `NextUp` backend.
///
/// Every call performs exactly one request; nothing is retried.
///
/// # Example
///
/// ```ignore
/// use nextup_api::{ApiClient, ApiConfig, LoginRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ApiConfig::new("http://192.168.1.6:5500"))?;
/// let resp = client
///     .login(&LoginRequest {
///         email: "me@example.com".to_string(),
///         password: "secret".to_string(),
///     })
///     .await?;
/// println!("{}", resp.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid absolute URL or the
    /// HTTP client cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base_url {:?}: {e}", config.base_url)))?;

        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed.
    #[tracing::instrument(skip_all, fields(name = %req.name))]
    pub async fn create_project(&self, req: &CreateProjectRequest) -> Result<ApiResponse, ApiError> {
        self.post(PATH_CREATE_PROJECT, req).await
    }

    /// Signs in with an existing account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed.
    #[tracing::instrument(skip_all, fields(email = %req.email))]
    pub async fn login(&self, req: &LoginRequest) -> Result<ApiResponse, ApiError> {
        self.post(PATH_LOGIN, req).await
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed.
    #[tracing::instrument(skip_all, fields(email = %req.email))]
    pub async fn register(&self, req: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        self.post(PATH_REGISTER, req).await
    }

    async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.full_url(path);
        tracing::debug!(url, "sending request");
        let req = self.http.build_json_request(Method::POST, &url, body)?;
        self.http.execute(req).await
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
