// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::error::Error;

use jiff::{Zoned, civil::Date};
use nextup_api::ApiClient;

use crate::{
    Config, LoginDraft, ProjectForm, SignUpDraft, SubmissionResult, auth, submit_project,
};

/// `NextUp` application core.
#[derive(Debug, Clone)]
pub struct NextUp {
    today: Date,
    client: ApiClient,
}

impl NextUp {
    /// Creates a new instance with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend settings are unusable.
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        let client = ApiClient::new(config.api)
            .map_err(|e| format!("Failed to initialize API client: {e}"))?;

        Ok(Self {
            today: Zoned::now().date(),
            client,
        })
    }

    /// The current day, fixed when the instance was created.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Starts an empty project form.
    pub fn new_project_form(&self) -> RefCell<ProjectForm> {
        RefCell::new(ProjectForm::new())
    }

    /// Submits the form, see [`submit_project`].
    pub async fn submit_project(&self, form: &RefCell<ProjectForm>) -> Option<SubmissionResult> {
        submit_project(form, &self.client).await
    }

    /// Registers a new account.
    pub async fn sign_up(&self, draft: &SignUpDraft) -> SubmissionResult {
        auth::sign_up(&self.client, draft).await
    }

    /// Logs in with an existing account.
    pub async fn login(&self, draft: &LoginDraft) -> SubmissionResult {
        auth::login(&self.client, draft).await
    }
}
