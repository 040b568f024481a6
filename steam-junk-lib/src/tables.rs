//! CSV table I/O for chart records, tag input tables and junction rows.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use steam_junk_catalog::{GameRecord, JunctionRow, RECORD_COLUMNS, TagInputRow};

use crate::error::BatchError;

/// Header row of the junction table.
pub const JUNCTION_COLUMNS: [&str; 2] = ["game_name", "tag_id"];

/// Write a chart record table (`name,price,rating,release,follows,reviews,peak`).
pub fn write_records(path: &Path, records: &[GameRecord]) -> Result<(), BatchError> {
    write_table(path, &RECORD_COLUMNS, records)
}

/// Write a junction table (`game_name,tag_id`).
pub fn write_junction(path: &Path, rows: &[JunctionRow]) -> Result<(), BatchError> {
    write_table(path, &JUNCTION_COLUMNS, rows)
}

/// Read a tag input table from a file.
pub fn read_tag_input_file(path: &Path) -> Result<Vec<TagInputRow>, BatchError> {
    let file = std::fs::File::open(path).map_err(|e| BatchError::io(path, e))?;
    read_tag_inputs(file).map_err(|e| BatchError::csv(path, e))
}

/// Read a tag input table. Needs `name` and `tags` header columns; any
/// other columns are ignored.
pub fn read_tag_inputs<R: Read>(reader: R) -> Result<Vec<TagInputRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    reader.deserialize::<TagInputRow>().collect()
}

/// Write rows under an explicit header, so empty tables still get one.
///
/// The table is written to a sibling temp file and renamed into place, so a
/// failed write never leaves a truncated table behind.
fn write_table<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: &[T],
) -> Result<(), BatchError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BatchError::io(parent, e))?;
    }

    let tmp = path.with_extension("csv.tmp");
    let written = write_rows(&tmp, header, rows).and_then(|()| {
        std::fs::rename(&tmp, path).map_err(|e| BatchError::io(path, e))
    });
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    written
}

fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<(), BatchError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| BatchError::csv(path, e))?;

    writer
        .write_record(header)
        .map_err(|e| BatchError::csv(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| BatchError::csv(path, e))?;
    }
    writer.flush().map_err(|e| BatchError::io(path, e))?;
    Ok(())
}
