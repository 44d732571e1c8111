//! Picks the chart layout and drives scaling + drawing for one data set.

use std::io::Write;

use log::debug;

use crate::{
    core::{
        bounds::find_min_max,
        color::{Color, Painter},
        config::ChartConfig,
        data::Dataset,
        error::GraphError,
    },
    render::{
        legend::write_legend,
        row,
        scale::{block_count, normalize},
        vertical::VerticalAccumulator,
    },
};

/// Layout chosen from the category count and the chart flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One category.
    Single,
    /// Several categories, one bar per label, shared scale.
    Stacked,
    /// Several categories, each normalized on its own.
    Independent,
    /// Several categories side by side on a shared scale.
    Shared,
}

impl Mode {
    /// Vertical charts of several categories on a shared scale are rejected.
    pub fn select(categories: usize, cfg: &ChartConfig) -> Result<Self, GraphError> {
        if categories <= 1 {
            return Ok(Self::Single);
        }
        if cfg.vertical && !cfg.different_scale {
            return Err(GraphError::UnsupportedVertical);
        }
        Ok(if cfg.stacked {
            Self::Stacked
        } else if cfg.different_scale {
            Self::Independent
        } else {
            Self::Shared
        })
    }
}

/// One colour slot per category.
///
/// Explicit colours win; stacked charts without any fall back to the
/// palette so their segments stay distinguishable.
#[must_use]
pub fn resolve_colors(mode: Mode, categories: usize, explicit: &[Color]) -> Vec<Option<Color>> {
    if !explicit.is_empty() {
        explicit.iter().copied().map(Some).collect()
    } else if mode == Mode::Stacked {
        Color::palette(categories).into_iter().map(Some).collect()
    } else {
        vec![None; categories]
    }
}

/// Draw `data` into `out`.
///
/// Expects data that passed [`check_data`](crate::core::validate::check_data).
pub fn render<W: Write + ?Sized, P: Painter + ?Sized>(
    out: &mut W,
    data: &Dataset,
    colors: &[Color],
    cfg: &ChartConfig,
    painter: &P,
) -> Result<(), GraphError> {
    let categories = data.category_count();
    if categories == 0 {
        return Err(GraphError::EmptyData);
    }
    let mode = Mode::select(categories, cfg)?;
    let colors = resolve_colors(mode, categories, colors);
    debug!(
        "drawing {} rows x {categories} categories as {mode:?} (width {})",
        data.rows.len(),
        cfg.width
    );

    if !data.categories.is_empty() {
        write_legend(out, &data.categories, &colors, painter)?;
    }

    match mode {
        Mode::Single | Mode::Shared => {
            let normalized = normalize(&data.rows, cfg.width);
            if cfg.vertical {
                let color = colors.first().copied().flatten();
                vertical(out, &data.labels, &data.rows, &normalized, color, cfg, painter)?;
            } else {
                row::horizontal(out, &data.labels, &data.rows, &normalized, &colors, cfg, painter)?;
            }
            writeln!(out)?;
        }
        Mode::Stacked => {
            let normalized = normalize(&data.rows, cfg.width);
            row::stacked(out, &data.labels, &data.rows, &normalized, &colors, cfg, painter)?;
        }
        Mode::Independent => {
            for (i, color) in colors.iter().copied().enumerate() {
                let column = data.column(i);
                let normalized = normalize(&column, cfg.width);
                if cfg.vertical {
                    vertical(out, &data.labels, &column, &normalized, color, cfg, painter)?;
                } else {
                    row::horizontal(out, &data.labels, &column, &normalized, &[color], cfg, painter)?;
                }
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// One vertical chart with its own accumulator.
fn vertical<W: Write + ?Sized, P: Painter + ?Sized>(
    out: &mut W,
    labels: &[String],
    rows: &[Vec<f64>],
    normalized: &[Vec<f64>],
    color: Option<Color>,
    cfg: &ChartConfig,
    painter: &P,
) -> Result<(), GraphError> {
    let val_min = find_min_max(rows).map_or(0.0, |(lo, _)| lo);
    let mut acc = VerticalAccumulator::new(cfg.width);
    for (values, blocks) in rows.iter().zip(normalized) {
        for (&value, &norm) in values.iter().zip(blocks) {
            acc.accumulate(value, block_count(norm, cfg.width), val_min, color);
        }
    }
    acc.render(out, labels, cfg, painter)?;
    Ok(())
}
