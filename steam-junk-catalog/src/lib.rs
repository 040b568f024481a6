//! Game chart data model, field normalization, and chart text parsing.
//!
//! This crate holds the typed records produced from SteamDB-style chart
//! dumps and the pure functions that produce them. It performs no I/O;
//! `steam-junk-lib` reads the files and writes the tables.

pub mod chart_parser;
pub mod error;
pub mod normalize;
pub mod types;

pub use chart_parser::{is_discount_line, is_rank_marker, parse_chart, prepare_lines};
pub use error::{ErrorKind, Expected, FieldError, ParseError};
pub use normalize::{
    normalize_date, normalize_integer_with_separators, normalize_percentage, normalize_playtime,
    normalize_price, Playtime,
};
pub use types::*;
