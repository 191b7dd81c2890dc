// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use tokio::fs;

use nextup_core::{APP_NAME, Config};

const NEXTUP_CONFIG_ENV: &str = "NEXTUP_CONFIG";
const NEXTUP_DEV_ENV: &str = "NEXTUP_DEV";

const NEXTUP_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const NEXTUP_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locate and load the configuration: `--config`, then `NEXTUP_CONFIG`, then
/// the per-user config directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(NEXTUP_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({NEXTUP_DEV_ENV} is set): config must be explicitly specified via --config or {NEXTUP_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;

    tracing::debug!(base_url = config.api.base_url, "configuration loaded");
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(NEXTUP_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if NEXTUP_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if NEXTUP_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            NEXTUP_DEV_ENV,
            val,
            NEXTUP_DEV_VALID_TRUE.join(", "),
            NEXTUP_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
