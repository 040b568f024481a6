use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use steam_junk_lib::{DirKind, settings_path};

use super::load_settings;
use crate::error::CliError;

/// Show every resolved directory and its source.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "steam-junk Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let settings = load_settings()?;
    for kind in DirKind::ALL {
        let resolved = settings.resolve(kind, None);
        log::info!(
            "  {:<18} {} {}",
            kind.key(),
            resolved.path.display(),
            format!("({})", resolved.source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}
