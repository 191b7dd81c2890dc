// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use nextup_core::{LoginDraft, NextUp, SIGN_UP_SUCCESS_MESSAGE, SignUpDraft};

use crate::prompt::prompt_missing;
use crate::util::ensure_success;

#[derive(Clone)]
pub struct CmdSignUp {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CmdSignUp {
    pub const NAME: &str = "signup";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("register")
            .about("Create an account")
            .arg(arg!(username: -u --username <USERNAME> "Username"))
            .arg(arg_email())
            .arg(arg_password())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            username: matches.get_one::<String>("username").cloned(),
            email: get_email(matches),
            password: get_password(matches),
        }
    }

    pub async fn run(self, nextup: &NextUp) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Signing up...");

        let username = prompt_missing(self.username, "Username", false)?;
        let email = prompt_missing(self.email, "Email", false)?;
        let (password, confirm_password) = match self.password {
            Some(password) => (password.clone(), password),
            None => (
                prompt_missing(None, "Password", true)?,
                prompt_missing(None, "Confirm password", true)?,
            ),
        };

        let draft = SignUpDraft {
            username,
            email,
            password,
            confirm_password,
        };
        let result = nextup.sign_up(&draft).await;
        ensure_success(&result)?;

        println!("{}", SIGN_UP_SUCCESS_MESSAGE.green());
        Ok(())
    }
}

impl std::fmt::Debug for CmdSignUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmdSignUp")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Clone)]
pub struct CmdLogin {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Log in to your account")
            .arg(arg_email())
            .arg(arg_password())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            email: get_email(matches),
            password: get_password(matches),
        }
    }

    pub async fn run(self, nextup: &NextUp) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Logging in...");

        let draft = LoginDraft {
            email: prompt_missing(self.email, "Email", false)?,
            password: prompt_missing(self.password, "Password", true)?,
        };
        let result = nextup.login(&draft).await;
        ensure_success(&result)?;

        println!("{} {}", "Logged in as".green(), draft.email.bold());
        Ok(())
    }
}

impl std::fmt::Debug for CmdLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmdLogin")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn arg_email() -> Arg {
    arg!(email: -e --email <EMAIL> "Email address")
}

fn get_email(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("email").cloned()
}

fn arg_password() -> Arg {
    arg!(password: -p --password <PASSWORD> "Password, prompted for when omitted")
}

fn get_password(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("password").cloned()
}
