// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use nextup_api::ApiConfig;

/// The name of the `NextUp` application.
pub const APP_NAME: &str = "nextup";

/// Configuration for the `NextUp` application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Backend server settings.
    pub api: ApiConfig,
}

impl Config {
    /// Creates a configuration pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig::new(base_url),
        }
    }
}
