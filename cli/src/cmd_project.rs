// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use nextup_core::{DateRole, NextUp, ProjectField, ProjectForm, SubmissionResult};

use crate::project_formatter::ProjectFormatter;
use crate::prompt::prompt_project;
use crate::util::{ArgOutputFormat, ensure_success};

#[derive(Debug, Clone)]
pub struct CmdProjectNew {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdProjectNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a new project")
            .arg(arg_name())
            .arg(arg_description())
            .arg(arg_start())
            .arg(arg_end())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let description = matches.get_one::<String>("description").cloned();
        let start = matches.get_one::<String>("start").cloned();
        let end = matches.get_one::<String>("end").cloned();

        let name = match matches.get_one::<String>("name") {
            Some(name) => Some(name.clone()),
            None if description.is_none() && start.is_none() && end.is_none() => None,

            // If name is not provided but other fields are set, we still require a name.
            None => return Err("Name is required for new project".into()),
        };

        Ok(Self {
            name,
            description,
            start,
            end,

            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, nextup: &NextUp) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Creating new project...");

        let form = nextup.new_project_form();
        let interactive = self.name.is_none();
        if interactive {
            if !prompt_project(&form, nextup.today())? {
                tracing::info!("User canceled the project creation");
                return Ok(());
            }
        } else {
            self.fill(&form)?;
        }

        // The draft is cleared on success, keep what was sent for the output
        let sent = form.borrow().draft().to_request();

        let result = if interactive {
            submit_with_spinner(nextup, &form).await
        } else {
            nextup.submit_project(&form).await
        };
        let result = result.ok_or("A submission is already in progress")?;
        ensure_success(&result)?;

        if let Ok(project) = sent {
            let formatter = ProjectFormatter::new().with_output_format(self.output_format);
            println!("{}", formatter.format(&project)?);
        }
        Ok(())
    }

    /// Fill the form from the flags, applying dates through the picker.
    fn fill(&self, form: &RefCell<ProjectForm>) -> Result<(), Box<dyn Error>> {
        let mut form = form.borrow_mut();
        if let Some(name) = &self.name {
            form.update_field(ProjectField::Name(name.clone()));
        }
        if let Some(description) = &self.description {
            form.update_field(ProjectField::Description(description.clone()));
        }

        let dates = [(&self.start, "startDate"), (&self.end, "endDate")];
        for (value, key) in dates {
            let Some(value) = value else { continue };
            let (date, role) = match ProjectField::parse(key, value)? {
                ProjectField::StartDate(date) => (date, DateRole::Start),
                ProjectField::EndDate(date) => (date, DateRole::End),
                _ => continue,
            };
            if let Some(date) = date {
                form.picker().select_date(date, role)?;
            }
        }
        Ok(())
    }
}

async fn submit_with_spinner(
    nextup: &NextUp,
    form: &RefCell<ProjectForm>,
) -> Option<SubmissionResult> {
    let spinner = cliclack::spinner();

    // Polled once the submission is suspended, so the label reads in-flight
    let (result, ()) = futures::join!(nextup.submit_project(form), async {
        spinner.start(form.borrow().submit_label());
    });

    match &result {
        Some(r) if r.is_success() => spinner.stop("Project created successfully"),
        Some(r) => spinner.error(r.title()),
        None => spinner.stop("Already submitting"),
    }
    result
}

fn arg_name() -> Arg {
    arg!(name: -n --name <NAME> "Name of the project")
}

fn arg_description() -> Arg {
    arg!(description: -d --description <DESCRIPTION> "Description of the project")
}

fn arg_start() -> Arg {
    arg!(start: -s --start <DATE> "Start date of the project, in YYYY-MM-DD format")
}

fn arg_end() -> Arg {
    arg!(end: -e --end <DATE> "End date of the project, in YYYY-MM-DD format")
}
