//! Line-oriented data loader.
//!
//! ```text
//! # comment
//! @ boys, girls
//! 2007, 20.5, 30.5
//! 2008  0     60.0
//! ```
//!
//! A line containing a comma (past its first byte) is split on commas,
//! anything else on whitespace.  The first column is the label, the rest
//! are values; an `@` line names the categories.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
};

use thiserror::Error;

// --- Public Row Structs ---

/// Labels, one value per category for each label, and optional category names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub categories: Vec<String>,
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    #[must_use]
    pub fn new(categories: Vec<String>, labels: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self {
            categories,
            labels,
            rows,
        }
    }

    /// Number of values per row, taken from the first row.
    #[inline]
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// One category pulled out as single-value rows.
    #[must_use]
    pub fn column(&self, category: usize) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|r| r.get(category).copied().into_iter().collect())
            .collect()
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
    #[error("invalid value '{0}'")]
    BadFloat(String),
    #[error("no data rows found")]
    Empty,
}

// --- Helpers ---

/// Replace U+2212 MINUS SIGN with ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

fn split_columns(line: &str) -> Vec<&str> {
    match line.find(',') {
        Some(pos) if pos > 0 => line.split(',').map(str::trim).collect(),
        _ => line.split_whitespace().collect(),
    }
}

#[inline]
fn parse_f64(text: &str, line: usize) -> Result<f64, ParseError> {
    let bad = || ParseError {
        line,
        kind: ParseErrorKind::BadFloat(text.to_owned()),
    };
    let val = lexical_core::parse::<f64>(text.as_bytes()).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Ingest ---

pub fn read_data<R: Read>(src: R) -> Result<Dataset, ParseError> {
    let mut rdr = BufReader::new(src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Dataset::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('@') {
            data.categories = split_columns(header)
                .into_iter()
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .collect();
            continue;
        }

        let cols = split_columns(line);
        let Some((label, values)) = cols.split_first() else {
            continue;
        };
        let row = values
            .iter()
            .map(|v| parse_f64(v, line_no))
            .collect::<Result<Vec<_>, _>>()?;
        data.labels.push((*label).to_owned());
        data.rows.push(row);
    }

    if data.rows.is_empty() {
        return Err(ParseError {
            line: line_no,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(data)
}

pub fn read_data_from_path(path: &str) -> Result<Dataset, ParseError> {
    if path == "-" {
        read_data(io::stdin().lock())
    } else {
        read_data(File::open(path).map_err(|e| ParseError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
