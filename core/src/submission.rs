// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::fmt::Display;

use async_trait::async_trait;
use nextup_api::{
    ApiClient, ApiError, ApiResponse, CreateProjectRequest, LoginRequest, RegisterRequest,
    ResponseBody,
};

use crate::{ProjectForm, SubmitStart};

/// Shown whenever a request could not be completed.
pub const CONNECTION_GUIDANCE: &str = "\
Failed to connect to server. Please check:

1. The server is running and reachable
2. The API endpoint and network configuration are correct";

/// Fallback when the backend rejects a request without saying why.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// The outcome of a submission, to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The backend accepted the request.
    Success,
    /// The input must be corrected; nothing was sent.
    ValidationFailure(String),
    /// The request never completed.
    TransportFailure(String),
    /// The backend declined the request.
    ServerRejection(String),
}

impl SubmissionResult {
    /// Whether this is [`SubmissionResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The message for the user, absent on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::ValidationFailure(m) | Self::TransportFailure(m) | Self::ServerRejection(m) => {
                Some(m)
            }
        }
    }

    /// A short title for a notification dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::ValidationFailure(_) | Self::ServerRejection(_) => "Error",
            Self::TransportFailure(_) => "Connection Error",
        }
    }

    /// Maps a backend exchange to an outcome.
    ///
    /// `accepted` decides which statuses count as success. An accepted status
    /// with a body that is not JSON means the endpoint is not the expected API,
    /// and is reported like a transport failure. Other statuses are rejections
    /// carrying the body's `message`, or `fallback`.
    pub(crate) fn from_exchange(
        outcome: Result<ApiResponse, ApiError>,
        accepted: impl Fn(&ApiResponse) -> bool,
        fallback: &str,
    ) -> Self {
        match outcome {
            Err(e) => {
                tracing::warn!(err = %e, "request failed");
                Self::TransportFailure(CONNECTION_GUIDANCE.to_string())
            }
            Ok(resp) if accepted(&resp) => match resp.body() {
                ResponseBody::Text(_) => {
                    tracing::warn!(status = resp.status(), "success status with non-JSON body");
                    Self::TransportFailure(CONNECTION_GUIDANCE.to_string())
                }
                ResponseBody::Empty | ResponseBody::Json(_) => Self::Success,
            },
            Ok(resp) => {
                tracing::debug!(status = resp.status(), "request rejected");
                Self::ServerRejection(resp.message().unwrap_or(fallback).to_string())
            }
        }
    }
}

impl Display for SubmissionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(m) => write!(f, "{}: {m}", self.title()),
            None => write!(f, "{}", self.title()),
        }
    }
}

/// Submission phase of a form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Ready to submit.
    #[default]
    Idle,
    /// Waiting for the backend.
    InFlight,
}

/// The backend endpoints a form can submit to.
#[async_trait(?Send)]
pub trait Backend {
    /// Sends a project creation request.
    async fn create_project(&self, req: &CreateProjectRequest) -> Result<ApiResponse, ApiError>;

    /// Sends a login request.
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse, ApiError>;

    /// Sends a registration request.
    async fn register(&self, req: &RegisterRequest) -> Result<ApiResponse, ApiError>;
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn create_project(&self, req: &CreateProjectRequest) -> Result<ApiResponse, ApiError> {
        ApiClient::create_project(self, req).await
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse, ApiError> {
        ApiClient::login(self, req).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        ApiClient::register(self, req).await
    }
}

/// Validates and sends the form's draft.
///
/// Returns `None` without doing anything if the form already has a
/// submission in flight. Otherwise exactly one result is returned, and at
/// most one request is sent. The form is only borrowed between awaits, so
/// the caller may keep reading it (e.g. [`ProjectForm::submit_label`]) while
/// the request is pending.
pub async fn submit_project<B: Backend + ?Sized>(
    form: &RefCell<ProjectForm>,
    backend: &B,
) -> Option<SubmissionResult> {
    let start = form.borrow_mut().begin_submit();
    let req = match start {
        SubmitStart::Busy => {
            tracing::debug!("submission already in flight, ignoring");
            return None;
        }
        SubmitStart::Invalid(e) => return Some(SubmissionResult::ValidationFailure(e.to_string())),
        SubmitStart::Started(req) => req,
    };

    tracing::debug!(name = req.name, "submitting project");
    let guard = InFlightGuard { form: Some(form) };
    let outcome = backend.create_project(&req).await;
    let result = SubmissionResult::from_exchange(outcome, ApiResponse::is_created, GENERIC_FAILURE);

    guard.finish(&result);
    Some(result)
}

/// Returns the form to `Idle` if the submission future is dropped mid-request.
struct InFlightGuard<'a> {
    form: Option<&'a RefCell<ProjectForm>>,
}

impl InFlightGuard<'_> {
    fn finish(mut self, result: &SubmissionResult) {
        if let Some(form) = self.form.take() {
            form.borrow_mut().finish_submit(result);
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let Some(form) = self.form.take() else { return };
        match form.try_borrow_mut() {
            Ok(mut form) => {
                tracing::debug!("submission dropped before completion");
                form.abandon_submit();
            }
            Err(e) => tracing::warn!(err = %e, "form busy, submission left in flight"),
        }
    }
}
