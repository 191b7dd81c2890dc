// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use nextup_core::SubmissionResult;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Turns a failed submission into an error carrying the user-facing message.
///
/// Connection failures keep their title, the rest already read as errors.
pub fn ensure_success(result: &SubmissionResult) -> Result<(), Box<dyn Error>> {
    match result {
        SubmissionResult::Success => Ok(()),
        SubmissionResult::TransportFailure(_) => Err(result.to_string().into()),
        SubmissionResult::ValidationFailure(m) | SubmissionResult::ServerRejection(m) => {
            Err(m.as_str().into())
        }
    }
}
