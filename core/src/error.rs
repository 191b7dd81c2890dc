// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A local input problem the user must fix before anything is sent.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Project name is empty or whitespace.
    #[error("Please enter a project name")]
    MissingName,

    /// Start or end date is unset.
    #[error("Please select both start and end dates")]
    MissingDates,

    /// End date is earlier than start date.
    #[error("End date cannot be before start date")]
    EndBeforeStart,

    /// A required account field is empty.
    #[error("All fields are required")]
    MissingFields,

    /// Email address has no `@`.
    #[error("Please enter a valid email")]
    InvalidEmail,

    /// Password is shorter than [`MIN_PASSWORD_LEN`](crate::MIN_PASSWORD_LEN).
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Failure to turn a key/value pair into a [`ProjectField`](crate::ProjectField).
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The key does not name a project field.
    #[error("Unknown project field: {0}")]
    UnknownField(String),

    /// The value of a date field is not a `YYYY-MM-DD` date.
    #[error("Invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Parser error.
        #[source]
        source: jiff::Error,
    },
}
