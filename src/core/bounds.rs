//! Extrema over a data set + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::FALLBACK_COLUMNS;

/// Smallest and largest value across every row.
///
/// `None` when there is no value at all.
#[must_use]
pub fn find_min_max<R: AsRef<[f64]>>(rows: &[R]) -> Option<(f64, f64)> {
    let mut values = rows.iter().flat_map(|r| r.as_ref().iter().copied());
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_columns() -> usize {
    terminal_size().map_or(usize::from(FALLBACK_COLUMNS), |(Width(w), _)| usize::from(w))
}

/// Largest bar width that keeps `label + bar + tail` inside `columns`.
///
/// Never exceeds `requested` and never drops below one block.
#[inline]
#[must_use]
pub fn fit_width(requested: usize, columns: usize, label_width: usize, tail_width: usize) -> usize {
    columns
        .saturating_sub(label_width + tail_width + 1)
        .clamp(1, requested.max(1))
}
