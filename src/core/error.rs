//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Precise configuration faults, raised before any input is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid color `{name}`; colors must be one of: {valid}")]
    UnknownColor { name: String, valid: String },
    #[error("width must be at least 1")]
    ZeroWidth,
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
    #[error("{0} glyph must not be empty")]
    EmptyGlyph(&'static str),
    #[error("{0} marker must not be empty")]
    EmptyMarker(&'static str),
}

/// A data line that could not be turned into a table row.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseTableError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid number '{text}' in column {column}")]
    BadFloat { column: usize, text: String },
    #[error("expected {expected} values, got {got}")]
    RaggedRow { expected: usize, got: usize },
    #[error("row `{0}` has a label but no values")]
    MissingValues(String),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Parse(#[from] ParseTableError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("record {record} (`{label}`): expected {expected} values, got {got}")]
    RaggedRecord {
        record: usize,
        label: String,
        expected: usize,
        got: usize,
    },
    #[error("data set is empty")]
    EmptyData,
}
