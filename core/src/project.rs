// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::civil::Date;
use nextup_api::CreateProjectRequest;

use crate::{DateSelection, FieldError, ValidationError};

/// Draft for a project, edited field by field before it is sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// The project name, required.
    pub name: String,

    /// The description, may be empty.
    pub description: String,

    /// The start and end days.
    pub dates: DateSelection,

    /// The status the project is created with.
    pub status: ProjectStatus,
}

impl ProjectDraft {
    /// The start date, if selected.
    pub fn start_date(&self) -> Option<Date> {
        self.dates.start
    }

    /// The end date, if selected.
    pub fn end_date(&self) -> Option<Date> {
        self.dates.end
    }

    /// Returns the draft with one field replaced. Other fields are untouched.
    #[must_use]
    pub fn with_field(mut self, field: ProjectField) -> Self {
        match field {
            ProjectField::Name(v) => self.name = v,
            ProjectField::Description(v) => self.description = v,
            ProjectField::StartDate(v) => self.dates.start = v,
            ProjectField::EndDate(v) => self.dates.end = v,
        }
        self
    }

    /// Checks the draft, reporting only the first rule that fails.
    ///
    /// # Errors
    ///
    /// Returns the first of: missing name, missing dates, end before start.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.checked_dates().map(|_| ())
    }

    /// Builds the request body for a valid draft.
    ///
    /// # Errors
    ///
    /// Returns the same error as [`ProjectDraft::validate`].
    pub fn to_request(&self) -> Result<CreateProjectRequest, ValidationError> {
        let (start_date, end_date) = self.checked_dates()?;
        Ok(CreateProjectRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date,
            end_date,
            status: self.status.to_string(),
        })
    }

    fn checked_dates(&self) -> Result<(Date, Date), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        match (self.dates.start, self.dates.end) {
            (Some(start), Some(end)) if end < start => Err(ValidationError::EndBeforeStart),
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(ValidationError::MissingDates),
        }
    }
}

/// A single field update of a [`ProjectDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectField {
    /// Replace the name.
    Name(String),
    /// Replace the description.
    Description(String),
    /// Set or unset the start date.
    StartDate(Option<Date>),
    /// Set or unset the end date.
    EndDate(Option<Date>),
}

impl ProjectField {
    /// Parses a key/value pair. Date values use `YYYY-MM-DD`; an empty date unsets it.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key or a malformed date.
    pub fn parse(key: &str, value: &str) -> Result<Self, FieldError> {
        match key {
            "name" => Ok(Self::Name(value.to_string())),
            "description" => Ok(Self::Description(value.to_string())),
            "startDate" | "start_date" | "start" => parse_date(value).map(Self::StartDate),
            "endDate" | "end_date" | "end" => parse_date(value).map(Self::EndDate),
            _ => Err(FieldError::UnknownField(key.to_string())),
        }
    }
}

fn parse_date(value: &str) -> Result<Option<Date>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse::<Date>()
        .map(Some)
        .map_err(|source| FieldError::InvalidDate {
            value: value.to_string(),
            source,
        })
}

/// The status of a project.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    /// The project is running. New projects always start here.
    #[default]
    Active,
}

const STATUS_ACTIVE: &str = "active";

impl AsRef<str> for ProjectStatus {
    fn as_ref(&self) -> &str {
        match self {
            ProjectStatus::Active => STATUS_ACTIVE,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ProjectStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_ACTIVE => Ok(ProjectStatus::Active),
            _ => Err(()),
        }
    }
}
