// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! NextUp - plan your next project

use std::process::ExitCode;

use nextup_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
