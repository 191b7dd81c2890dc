// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::error::Error;

use cliclack::{confirm, input, intro, log, outro_cancel, password};
use jiff::civil::Date;
use nextup_core::{DateRole, ProjectField, ProjectForm, ValidationError};

use crate::calendar::TerminalCalendar;

/// Walk the user through the project form. Returns `false` if they gave up.
pub fn prompt_project(form: &RefCell<ProjectForm>, today: Date) -> Result<bool, Box<dyn Error>> {
    intro("New project")?;

    let name: String = input("Project name").placeholder("e.g. Launch").interact()?;
    let description: String = input("Description")
        .placeholder("optional")
        .required(false)
        .interact()?;
    {
        let mut form = form.borrow_mut();
        form.update_field(ProjectField::Name(name));
        form.update_field(ProjectField::Description(description));
    }

    loop {
        let mut start = TerminalCalendar::new("Start date", today);
        form.borrow_mut().picker().open(&mut start, DateRole::Start);
        let mut end = TerminalCalendar::new("End date", today);
        form.borrow_mut().picker().open(&mut end, DateRole::End);

        match form.borrow().validate() {
            Ok(()) => return Ok(true),
            Err(ValidationError::MissingName) => return Err(ValidationError::MissingName.into()),
            Err(e) => log::warning(e)?,
        }

        if !confirm("Pick the dates again?").initial_value(true).interact()? {
            outro_cancel("Project not created")?;
            return Ok(false);
        }
    }
}

/// Ask for each missing value, hiding passwords.
pub fn prompt_missing(
    value: Option<String>,
    prompt: &str,
    secret: bool,
) -> Result<String, Box<dyn Error>> {
    if let Some(value) = value {
        return Ok(value);
    }

    let value = if secret {
        password(prompt).mask('▪').interact()?
    } else {
        input(prompt).interact()?
    };
    Ok(value)
}
