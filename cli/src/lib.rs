// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of `NextUp`.

mod calendar;
mod cli;
mod cmd_auth;
mod cmd_project;
mod config;
mod project_formatter;
mod prompt;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
