// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::Date;

/// Body of `POST /api/projects/create`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// First day of the project.
    pub start_date: Date,
    /// Last day of the project.
    pub end_date: Date,
    /// Lifecycle status, `"active"` for new projects.
    pub status: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, PartialEq, Eq, serde::Serialize)]
pub struct RegisterRequest {
    /// Display name.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A response read in full from the backend, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    body: ResponseBody,
}

impl ApiResponse {
    /// Creates a response from a status code and the raw body text.
    #[must_use]
    pub fn new(status: u16, text: &str) -> Self {
        Self {
            status,
            body: ResponseBody::parse(text),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is `201 Created`.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.status == 201
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// The decoded body.
    #[must_use]
    pub const fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// The `message` field of a JSON body, if present and a string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Json(value) => value.get("message").and_then(|v| v.as_str()),
            ResponseBody::Empty | ResponseBody::Text(_) => None,
        }
    }
}

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// No body, or only whitespace.
    Empty,
    /// A body that parsed as JSON.
    Json(serde_json::Value),
    /// A body that is not JSON, kept verbatim.
    Text(String),
}

impl ResponseBody {
    fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }

        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(e) => {
                tracing::warn!(err = %e, "response body is not JSON");
                Self::Text(text.to_string())
            }
        }
    }

    /// Whether the body parsed as JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
