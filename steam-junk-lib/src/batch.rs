//! Directory-level batch runs.
//!
//! Units are processed one at a time, in sorted file-name order, so tag id
//! assignment is reproducible for identical inputs. A chart unit that fails
//! to parse is reported and skipped; its output file is never written.

use std::path::{Path, PathBuf};

use steam_junk_catalog::{GameRecord, parse_chart, prepare_lines};
use steam_junk_tags::{JunctionBuilder, TagDictionary};

use crate::error::BatchError;
use crate::tables::{read_tag_input_file, write_junction, write_records};

/// File name of the persisted tag dictionary inside the tag output directory.
pub const TAG_SNAPSHOT_FILE: &str = "tags.csv";

/// File name of the junction table inside the tag output directory.
pub const JUNCTION_FILE: &str = "game_tag.csv";

/// A unit that was skipped, and why.
#[derive(Debug)]
pub struct UnitFailure {
    pub path: PathBuf,
    pub error: BatchError,
}

/// Outcome of [`convert_chart_dir`].
#[derive(Debug, Default)]
pub struct ChartReport {
    /// Units converted successfully.
    pub units: usize,
    /// Records written across all successful units.
    pub records: usize,
    pub failures: Vec<UnitFailure>,
}

/// Outcome of [`normalize_tag_dir`].
#[derive(Debug, Default)]
pub struct TagReport {
    /// Input tables read successfully.
    pub files: usize,
    /// Game rows seen across those tables.
    pub games: usize,
    /// Junction rows written.
    pub associations: usize,
    /// Dictionary size before and after the run.
    pub tags_before: usize,
    pub tags_after: usize,
    pub failures: Vec<UnitFailure>,
}

/// The year context of a chart unit: its file stem (`2024.txt` → `2024`).
pub fn unit_year(path: &Path) -> Option<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Read and parse one chart unit file.
pub fn parse_chart_file(path: &Path) -> Result<Vec<GameRecord>, BatchError> {
    let year =
        unit_year(path).ok_or_else(|| BatchError::MissingYear(path.display().to_string()))?;
    let text = std::fs::read_to_string(path).map_err(|e| BatchError::io(path, e))?;
    let lines = prepare_lines(&text);
    parse_chart(&lines, year).map_err(|source| BatchError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Convert every `*.txt` chart unit in `input` to `<stem>.csv` in `output`.
pub fn convert_chart_dir(input: &Path, output: &Path) -> Result<ChartReport, BatchError> {
    let units = list_files(input, "txt")?;
    let mut report = ChartReport::default();

    if units.is_empty() {
        log::warn!("No .txt chart files in {}", input.display());
    }

    for path in units {
        let records = match parse_chart_file(&path) {
            Ok(records) => records,
            Err(error) => {
                log::warn!("Skipping {}: {}", path.display(), error);
                report.failures.push(UnitFailure { path, error });
                continue;
            }
        };

        let mut out_path = output.join(path.file_name().unwrap_or_default());
        out_path.set_extension("csv");
        if let Err(error) = write_records(&out_path, &records) {
            log::warn!("Failed to write {}: {}", out_path.display(), error);
            report.failures.push(UnitFailure { path, error });
            continue;
        }

        log::info!(
            "Converted {} -> {} ({} records)",
            path.display(),
            out_path.display(),
            records.len()
        );
        report.units += 1;
        report.records += records.len();
    }

    Ok(report)
}

/// Build `tags.csv` and `game_tag.csv` in `output` from every `*.csv` tag
/// table in `input`.
///
/// The dictionary is seeded from `output/tags.csv` when it exists and the
/// full dictionary is written back at the end of the run. Each input table
/// is read completely before any of its tags are assigned, so an unreadable
/// table contributes nothing.
pub fn normalize_tag_dir(input: &Path, output: &Path) -> Result<TagReport, BatchError> {
    let snapshot_path = output.join(TAG_SNAPSHOT_FILE);
    let mut dictionary = TagDictionary::load(&snapshot_path)?;
    let mut report = TagReport {
        tags_before: dictionary.len(),
        ..TagReport::default()
    };

    let tables: Vec<PathBuf> = list_files(input, "csv")?
        .into_iter()
        .filter(|p| !is_output_table(p))
        .collect();
    if tables.is_empty() {
        log::warn!("No .csv tag tables in {}", input.display());
    }

    let mut builder = JunctionBuilder::new(&mut dictionary);
    for path in tables {
        let rows = match read_tag_input_file(&path) {
            Ok(rows) => rows,
            Err(error) => {
                log::warn!("Skipping {}: {}", path.display(), error);
                report.failures.push(UnitFailure { path, error });
                continue;
            }
        };
        let added = builder.add_rows(&rows);
        log::info!(
            "Normalized tags in {} ({} games, {} associations)",
            path.display(),
            rows.len(),
            added
        );
        report.files += 1;
        report.games += rows.len();
    }
    let junction = builder.finish();
    report.associations = junction.len();

    // The junction table goes first: if it cannot be written, the snapshot
    // must not advance past it.
    write_junction(&output.join(JUNCTION_FILE), &junction)?;
    dictionary.persist(&snapshot_path)?;
    report.tags_after = dictionary.len();

    Ok(report)
}

/// Sorted list of files in `dir` with the given extension.
fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::DirNotFound(dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| BatchError::io(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == extension))
        .collect();
    files.sort();
    Ok(files)
}

/// True for the tables this module writes, which may share a directory with
/// the inputs.
fn is_output_table(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name == TAG_SNAPSHOT_FILE || name == JUNCTION_FILE)
}
