use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use steam_junk_lib::{DirKind, JUNCTION_FILE, TAG_SNAPSHOT_FILE, normalize_tag_dir};

use super::load_settings;
use crate::cli_types::DirArgs;
use crate::error::CliError;

/// Normalize every tag table in the input directory.
pub(crate) fn run_tags(dirs: DirArgs) -> Result<(), CliError> {
    let settings = load_settings()?;
    let input = settings.resolve(DirKind::TagsInput, dirs.input);
    let output = settings.resolve(DirKind::TagsOutput, dirs.output);

    log::info!(
        "{}",
        format!(
            "Normalizing tags in {} -> {}",
            input.path.display(),
            output.path.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );

    let report = normalize_tag_dir(&input.path, &output.path)?;

    if !report.failures.is_empty() {
        log::warn!(
            "{} {} tag table(s) skipped",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            report.failures.len(),
        );
    }

    log::info!(
        "{} Updated {} ({} unique tags, {} new)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        TAG_SNAPSHOT_FILE,
        report.tags_after,
        report.tags_after - report.tags_before,
    );
    log::info!(
        "{} Wrote {} ({} associations from {} games in {} file(s))",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        JUNCTION_FILE,
        report.associations,
        report.games,
        report.files,
    );
    Ok(())
}
