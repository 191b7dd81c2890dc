// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the `NextUp` project planner: drafting a project, picking its date
//! range, and submitting it to the backend.

mod auth;
mod config;
mod date_range;
mod error;
mod form;
mod nextup;
mod project;
mod submission;

pub use crate::auth::{
    LoginDraft, MIN_PASSWORD_LEN, SIGN_UP_SUCCESS_MESSAGE, SignUpDraft, login, sign_up,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::date_range::{
    CalendarWidget, DateMark, DateMarker, DateRangePicker, DateRole, DateSelection, MarkedDates,
};
pub use crate::error::{FieldError, ValidationError};
pub use crate::form::{ProjectForm, SubmitStart};
pub use crate::nextup::NextUp;
pub use crate::project::{ProjectDraft, ProjectField, ProjectStatus};
pub use crate::submission::{
    Backend, CONNECTION_GUIDANCE, SubmissionPhase, SubmissionResult, submit_project,
};

pub use nextup_api::{
    ApiConfig, ApiError, ApiResponse, CreateProjectRequest, LoginRequest, RegisterRequest,
    ResponseBody,
};
