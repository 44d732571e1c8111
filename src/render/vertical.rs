//! Vertical bars built by transposing horizontal ones.
//!
//! Every value becomes a column of glyphs; slicing all columns at the same
//! height, top first, gives the printable rows.  Cells are two columns wide
//! (glyph + space, or two spaces where a shorter bar has nothing) so bars,
//! values and labels line up under each other.
//!
//! A `VerticalAccumulator` lives for exactly one chart (or one category of
//! a chart drawn at different scales); make a new one for the next.

use std::io::{self, Write};

use crate::{
    core::{
        color::{Color, Painter},
        config::ChartConfig,
    },
    render::row::bar_glyphs,
};

pub struct VerticalAccumulator {
    width: usize,
    columns: Vec<Vec<char>>,
    values: Vec<f64>,
    max_blocks: usize,
    color: Option<Color>,
    view: Vec<String>,
}

impl VerticalAccumulator {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            columns: Vec::new(),
            values: Vec::new(),
            max_blocks: 0,
            color: None,
            view: Vec::new(),
        }
    }

    /// Add one bar and return the transposed rows so far, tallest first.
    pub fn accumulate(
        &mut self,
        value: f64,
        blocks: usize,
        val_min: f64,
        color: Option<Color>,
    ) -> &[String] {
        self.values.push(value);
        self.max_blocks = self.max_blocks.max(blocks);
        self.columns
            .push(bar_glyphs(value, blocks, val_min).chars().collect());
        self.color = color;
        self.view = self.transpose();
        &self.view
    }

    /// Tallest bar seen so far, in blocks.
    #[inline]
    #[must_use]
    pub fn max_blocks(&self) -> usize {
        self.max_blocks
    }

    fn transpose(&self) -> Vec<String> {
        let height = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        (0..height)
            .rev()
            .take(self.width)
            .map(|level| {
                let mut row = String::with_capacity(self.columns.len() * 4);
                for col in &self.columns {
                    match col.get(level) {
                        Some(&c) => {
                            row.push(c);
                            row.push(' ');
                        }
                        None => row.push_str("  "),
                    }
                }
                row.trim_end().to_owned()
            })
            .collect()
    }

    /// Bars, then a `Values` footer, then (unless hidden) a `Labels` footer.
    pub fn render<W: Write + ?Sized, P: Painter + ?Sized>(
        &self,
        out: &mut W,
        labels: &[String],
        cfg: &ChartConfig,
        painter: &P,
    ) -> io::Result<()> {
        if !self.view.is_empty() {
            let mut bars = String::new();
            painter.paint(&mut bars, self.color, &self.view.join("\n"));
            writeln!(out, "{bars}")?;
        }

        let rule = "-".repeat(self.columns.len());
        writeln!(out, "{rule}Values{rule}")?;
        let values: Vec<String> = self
            .values
            .iter()
            .map(|v| cfg.format.format(*v).trim().to_owned())
            .collect();
        write_columns(out, &values)?;

        if cfg.show_labels {
            writeln!(out, "{rule}Labels{rule}")?;
            write_columns(out, labels)?;
        }
        Ok(())
    }
}

/// Print each item top-down, one character per line, side by side.
fn write_columns<W: Write + ?Sized, S: AsRef<str>>(out: &mut W, items: &[S]) -> io::Result<()> {
    let cols: Vec<Vec<char>> = items.iter().map(|s| s.as_ref().chars().collect()).collect();
    let height = cols.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..height {
        let mut line = String::with_capacity(cols.len() * 2);
        for col in &cols {
            line.push(col.get(i).copied().unwrap_or(' '));
            line.push(' ');
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
