// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use nextup_api::CreateProjectRequest;

use crate::{
    DateRangePicker, ProjectDraft, ProjectField, SubmissionPhase, SubmissionResult,
    ValidationError,
};

const LABEL_IDLE: &str = "Create Project";
const LABEL_IN_FLIGHT: &str = "Creating...";

/// State behind the "new project" screen: the draft and the submission phase.
#[derive(Debug, Default, Clone)]
pub struct ProjectForm {
    draft: ProjectDraft,
    phase: SubmissionPhase,
}

/// What happened when a submission was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is already in flight; nothing was done.
    Busy,
    /// The draft is invalid; the form stays idle.
    Invalid(ValidationError),
    /// The form is now in flight; send this request.
    Started(CreateProjectRequest),
}

impl ProjectForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft.
    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// Replaces one field of the draft, last write wins.
    ///
    /// Dates set this way are not reordered; use [`ProjectForm::picker`] for that.
    pub fn update_field(&mut self, field: ProjectField) {
        self.draft = std::mem::take(&mut self.draft).with_field(field);
    }

    /// Checks the draft, reporting only the first rule that fails.
    ///
    /// # Errors
    ///
    /// See [`ProjectDraft::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate()
    }

    /// Opens the date range picker over the draft's dates.
    pub fn picker(&mut self) -> DateRangePicker<'_> {
        DateRangePicker::new(&mut self.draft.dates)
    }

    /// The submission phase.
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == SubmissionPhase::InFlight
    }

    /// Whether the submit control accepts input.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// The label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Idle => LABEL_IDLE,
            SubmissionPhase::InFlight => LABEL_IN_FLIGHT,
        }
    }

    /// Moves `Idle -> InFlight` if the draft is valid.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.is_loading() {
            return SubmitStart::Busy;
        }

        match self.draft.to_request() {
            Ok(req) => {
                self.phase = SubmissionPhase::InFlight;
                SubmitStart::Started(req)
            }
            Err(e) => SubmitStart::Invalid(e),
        }
    }

    /// Moves back to `Idle` without a result, keeping the draft.
    pub fn abandon_submit(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }

    /// Moves back to `Idle`, clearing the draft only on success.
    pub fn finish_submit(&mut self, result: &SubmissionResult) {
        self.phase = SubmissionPhase::Idle;
        if result.is_success() {
            self.draft = ProjectDraft::default();
        }
    }
}
