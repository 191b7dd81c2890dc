// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use nextup_api::{ApiResponse, LoginRequest, RegisterRequest};

use crate::submission::GENERIC_FAILURE;
use crate::{Backend, SubmissionResult, ValidationError};

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Shown after an account was created.
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Account created successfully";

const LOGIN_FAILURE: &str = "Invalid credentials";

/// Account details entered on the sign-up screen.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct SignUpDraft {
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password typed a second time. Never sent.
    pub confirm_password: String,
}

impl SignUpDraft {
    /// Checks the draft, reporting only the first rule that fails.
    ///
    /// # Errors
    ///
    /// Returns the first of: empty field, invalid email, short password,
    /// mismatched confirmation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for SignUpDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpDraft")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// Credentials entered on the login screen.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct LoginDraft {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

impl LoginDraft {
    /// Checks the draft, reporting only the first rule that fails.
    ///
    /// # Errors
    ///
    /// Returns the first of: empty field, invalid email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

impl fmt::Debug for LoginDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDraft")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registers a new account.
pub async fn sign_up<B: Backend + ?Sized>(backend: &B, draft: &SignUpDraft) -> SubmissionResult {
    if let Err(e) = draft.validate() {
        return SubmissionResult::ValidationFailure(e.to_string());
    }

    tracing::debug!(username = draft.username, "registering account");
    let outcome = backend.register(&draft.to_request()).await;
    SubmissionResult::from_exchange(outcome, ApiResponse::is_success, GENERIC_FAILURE)
}

/// Logs in with an existing account.
pub async fn login<B: Backend + ?Sized>(backend: &B, draft: &LoginDraft) -> SubmissionResult {
    if let Err(e) = draft.validate() {
        return SubmissionResult::ValidationFailure(e.to_string());
    }

    let req = LoginRequest {
        email: draft.email.clone(),
        password: draft.password.clone(),
    };
    let outcome = backend.login(&req).await;
    SubmissionResult::from_exchange(outcome, ApiResponse::is_success, LOGIN_FAILURE)
}
