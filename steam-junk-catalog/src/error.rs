use thiserror::Error;

/// Errors raised by a single field normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A numeric, percentage, currency or date token did not parse.
    #[error("invalid {kind} token '{token}'")]
    Format { kind: &'static str, token: String },

    /// Month abbreviation missing from the month table.
    #[error("unknown month abbreviation '{0}'")]
    UnknownMonth(String),
}

impl FieldError {
    pub fn format(kind: &'static str, token: impl Into<String>) -> Self {
        Self::Format {
            kind,
            token: token.into(),
        }
    }

    pub fn unknown_month(abbrev: impl Into<String>) -> Self {
        Self::UnknownMonth(abbrev.into())
    }
}

/// The line an entry block still needed when its unit ran out of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Name,
    Data,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "a game name"),
            Self::Data => write!(f, "a data line"),
        }
    }
}

/// Errors that abort parsing of a chart unit.
///
/// Line numbers are 1-based positions in the prepared (trimmed, non-blank)
/// line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: {source}")]
    Field {
        line: usize,
        #[source]
        source: FieldError,
    },

    #[error("line {line}: expected 6 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("input ended while expecting {0}")]
    UnexpectedEnd(Expected),
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token failed to parse as its expected type.
    Format,
    /// A month abbreviation was not in the table.
    Lookup,
    /// Wrong field count, or the unit ended mid-entry.
    Structural,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Field {
                source: FieldError::Format { .. },
                ..
            } => ErrorKind::Format,
            Self::Field {
                source: FieldError::UnknownMonth(_),
                ..
            } => ErrorKind::Lookup,
            Self::FieldCount { .. } | Self::UnexpectedEnd(_) => ErrorKind::Structural,
        }
    }
}
