pub(crate) mod charts;
pub(crate) mod config;
pub(crate) mod tags;

use steam_junk_lib::Settings;

use crate::error::CliError;

/// Load `settings.toml`, treating a broken file as a config error.
pub(crate) fn load_settings() -> Result<Settings, CliError> {
    Settings::load().map_err(|e| CliError::config(e.to_string()))
}
