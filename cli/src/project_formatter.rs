// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Colorize;
use nextup_core::CreateProjectRequest;

use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct ProjectFormatter {
    output_format: ArgOutputFormat,
}

impl ProjectFormatter {
    pub fn new() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, output_format: ArgOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn format(&self, project: &CreateProjectRequest) -> Result<String, Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Json => Ok(serde_json::to_string_pretty(project)?),
            ArgOutputFormat::Table => Ok(format_table(project)),
        }
    }
}

fn format_table(project: &CreateProjectRequest) -> String {
    let rows = [
        ("Name", project.name.bold().to_string()),
        ("Description", project.description.clone()),
        ("Start", project.start_date.to_string()),
        ("End", project.end_date.to_string()),
        ("Status", project.status.green().to_string()),
    ];

    rows.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{:<12} {value}", format!("{key}:")))
        .collect::<Vec<_>>()
        .join("\n")
}
