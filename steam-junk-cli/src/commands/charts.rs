use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use steam_junk_lib::{DirKind, convert_chart_dir};

use super::load_settings;
use crate::cli_types::DirArgs;
use crate::error::CliError;

/// Convert every chart unit in the input directory.
pub(crate) fn run_charts(dirs: DirArgs) -> Result<(), CliError> {
    let settings = load_settings()?;
    let input = settings.resolve(DirKind::ChartsInput, dirs.input);
    let output = settings.resolve(DirKind::ChartsOutput, dirs.output);

    log::info!(
        "{}",
        format!(
            "Converting charts in {} -> {}",
            input.path.display(),
            output.path.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );

    let report = convert_chart_dir(&input.path, &output.path)?;

    let marker = if report.failures.is_empty() {
        "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "\u{2718}".if_supports_color(Stdout, |t| t.red()).to_string()
    };
    log::info!(
        "{} {} unit(s), {} record(s) written; {} unit(s) skipped",
        marker,
        report.units,
        report.records,
        report.failures.len(),
    );
    Ok(())
}
