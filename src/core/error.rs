//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::data::ParseError;

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width must be a positive number of characters")]
    ZeroWidth,
}

/// Malformed `--format` template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("format template has more than one replacement field")]
    MultipleFields,
    #[error("unclosed `{{` in format template")]
    Unclosed,
    #[error("single `}}` in format template")]
    StrayBrace,
    #[error("unsupported replacement field `{0}`")]
    UnsupportedField(String),
    #[error("invalid format spec `{0}`")]
    InvalidSpec(String),
    #[error("unknown format code `{0}`")]
    UnknownType(char),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Label and data array sizes don't match ({labels} labels, {rows} rows)")]
    ShapeMismatch { labels: usize, rows: usize },
    #[error("There are missing values (row {row}: expected {expected}, got {got})")]
    MissingValues {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("Category names and data columns don't match ({names} names, {categories} columns)")]
    CategoryCount { names: usize, categories: usize },
    #[error("Color and category array sizes don't match ({colors} colors, {categories} categories)")]
    ColorCount { colors: usize, categories: usize },
    #[error("Vertical graph chart for multiple series of same scale is not supported yet.")]
    UnsupportedVertical,
    #[error("data set is empty")]
    EmptyData,
}
