//! Batch driver for steam-junk.
//!
//! Walks input directories, feeds each chart unit through the parser and
//! each tag table through the junction builder, and writes the resulting
//! CSV tables. Also owns the shared settings file.

pub mod batch;
pub mod error;
pub mod settings;
pub mod tables;

pub use batch::{
    ChartReport, JUNCTION_FILE, TAG_SNAPSHOT_FILE, TagReport, UnitFailure, convert_chart_dir,
    normalize_tag_dir, parse_chart_file, unit_year,
};
pub use error::BatchError;
pub use settings::{DirKind, ResolvedDir, SettingSource, Settings, settings_path};
