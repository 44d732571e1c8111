//! Raw values to block counts.

use crate::core::bounds::find_min_max;

/// Map every value onto `[0, width]` blocks.
///
/// * A negative minimum shifts all values up by its magnitude first.
/// * If the (shifted) maximum is below `width` the values already fit and
///   come back unchanged, so small counts are never magnified.
/// * Otherwise `v -> (v - min) * width / (max - min)`.
/// * When every value is the same and doesn't fit, each one becomes a
///   full-width bar.
#[must_use]
pub fn normalize<R: AsRef<[f64]>>(rows: &[R], width: usize) -> Vec<Vec<f64>> {
    let Some((min, _)) = find_min_max(rows) else {
        return rows.iter().map(|r| r.as_ref().to_vec()).collect();
    };

    let offset = if min < 0.0 { min.abs() } else { 0.0 };
    let shifted: Vec<Vec<f64>> = rows
        .iter()
        .map(|r| r.as_ref().iter().map(|v| v + offset).collect())
        .collect();

    let Some((low, high)) = find_min_max(&shifted) else {
        return shifted;
    };
    let width = width as f64;
    if high < width {
        return shifted;
    }

    let span = high - low;
    if span <= 0.0 {
        return shifted.iter().map(|r| vec![width; r.len()]).collect();
    }

    let factor = width / span;
    log::debug!("normalizing [{low}, {high}] by {factor:.4}");
    shifted
        .into_iter()
        .map(|r| r.into_iter().map(|v| (v - low) * factor).collect())
        .collect()
}

/// Whole blocks drawn for a normalized value (floor, capped at `width`).
#[inline]
#[must_use]
pub fn block_count(normalized: f64, width: usize) -> usize {
    let floored = normalized.max(0.0).floor();
    if floored >= width as f64 {
        width
    } else {
        floored as usize
    }
}
