//! Horizontal rows: `label: ▇▇▇▇ 4.00`.

use std::io::{self, Write};

use crate::{
    core::{
        bounds::find_min_max,
        color::{Color, Painter},
        config::ChartConfig,
        constants::{SM_TICK, TICK},
    },
    render::scale::block_count,
};

/// Non-zero values that round down to nothing still get a thin tick.
#[inline]
#[must_use]
pub fn needs_minimal_tick(value: f64, blocks: usize, val_min: f64) -> bool {
    blocks < 1 && (value > val_min || value > 0.0)
}

/// Glyphs of one bar, uncoloured.
#[must_use]
pub fn bar_glyphs(value: f64, blocks: usize, val_min: f64) -> String {
    if needs_minimal_tick(value, blocks, val_min) {
        SM_TICK.to_string()
    } else {
        TICK.to_string().repeat(blocks)
    }
}

/// Append one bar to `line`, coloured when `color` is set.
pub fn push_bar<P: Painter + ?Sized>(
    line: &mut String,
    painter: &P,
    value: f64,
    blocks: usize,
    val_min: f64,
    color: Option<Color>,
) {
    let glyphs = bar_glyphs(value, blocks, val_min);
    if !glyphs.is_empty() {
        painter.paint(line, color, &glyphs);
    }
}

/// One line per value.  Later values of a row sit under blank space as
/// wide as the label.
pub fn horizontal<W: Write + ?Sized, P: Painter + ?Sized>(
    out: &mut W,
    labels: &[String],
    rows: &[Vec<f64>],
    normalized: &[Vec<f64>],
    colors: &[Option<Color>],
    cfg: &ChartConfig,
    painter: &P,
) -> io::Result<()> {
    let val_min = find_min_max(rows).map_or(0.0, |(lo, _)| lo);

    for ((label, values), blocks) in labels.iter().zip(rows).zip(normalized) {
        let prefix = cfg.label_prefix(label);
        let blank = " ".repeat(prefix.chars().count());

        for (j, (&value, &norm)) in values.iter().zip(blocks).enumerate() {
            let mut line = if j == 0 { prefix.clone() } else { blank.clone() };
            push_bar(
                &mut line,
                painter,
                value,
                block_count(norm, cfg.width),
                val_min,
                colors.get(j).copied().flatten(),
            );
            line.push_str(&cfg.tail(value));
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// One line per label: every category's bar back to back, then the row sum.
pub fn stacked<W: Write + ?Sized, P: Painter + ?Sized>(
    out: &mut W,
    labels: &[String],
    rows: &[Vec<f64>],
    normalized: &[Vec<f64>],
    colors: &[Option<Color>],
    cfg: &ChartConfig,
    painter: &P,
) -> io::Result<()> {
    let val_min = find_min_max(rows).map_or(0.0, |(lo, _)| lo);

    for ((label, values), blocks) in labels.iter().zip(rows).zip(normalized) {
        let mut line = cfg.label_prefix(label);
        for (j, (&value, &norm)) in values.iter().zip(blocks).enumerate() {
            push_bar(
                &mut line,
                painter,
                value,
                block_count(norm, cfg.width),
                val_min,
                colors.get(j).copied().flatten(),
            );
        }
        line.push_str(&cfg.tail(values.iter().sum()));
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::Ansi, format::ValueFormat};
    use crate::render::test_support::Tagged;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    fn draw(
        f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>,
    ) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn minimal_tick_for_small_positive() {
        assert_eq!(bar_glyphs(0.4, 0, 0.0), "▏");
        assert_eq!(bar_glyphs(0.0, 0, 0.0), "");
        assert_eq!(bar_glyphs(-1.0, 0, -2.0), "▏");
        assert_eq!(bar_glyphs(-2.0, 0, -2.0), "");
        assert_eq!(bar_glyphs(0.4, 3, 0.0), "▇▇▇");
    }

    #[test]
    fn single_series_rows() {
        let rows = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
        let cfg = ChartConfig::default();
        let text = draw(|out| {
            horizontal(out, &labels(&["a", "b", "c", "d"]), &rows, &rows, &[None], &cfg, &Ansi)
        });
        assert_eq!(
            text,
            "a: ▇ 1.00 \nb: ▇▇ 2.00 \nc: ▇▇▇ 3.00 \nd: ▇▇▇▇ 4.00 \n"
        );
    }

    #[test]
    fn later_categories_are_indented() {
        let rows = vec![vec![1.0, 2.0]];
        let cfg = ChartConfig::builder()
            .format(ValueFormat::parse("{:.0f}").unwrap())
            .build()
            .unwrap();
        let text = draw(|out| {
            horizontal(out, &labels(&["2007"]), &rows, &rows, &[None, None], &cfg, &Ansi)
        });
        assert_eq!(text, "2007: ▇ 1\n      ▇▇ 2\n");
    }

    #[test]
    fn hidden_labels() {
        let rows = vec![vec![2.0]];
        let cfg = ChartConfig::builder().show_labels(false).build().unwrap();
        let text = draw(|out| horizontal(out, &labels(&["x"]), &rows, &rows, &[], &cfg, &Ansi));
        assert_eq!(text, "▇▇ 2.00 \n");
    }

    #[test]
    fn colour_wraps_only_the_blocks() {
        let rows = vec![vec![2.0]];
        let cfg = ChartConfig::default();
        let text = draw(|out| {
            horizontal(out, &labels(&["x"]), &rows, &rows, &[Some(Color::Red)], &cfg, &Tagged)
        });
        assert_eq!(text, "x: <91>▇▇</> 2.00 \n");
    }

    #[test]
    fn zero_value_draws_nothing_and_no_colour() {
        let rows = vec![vec![0.0], vec![5.0]];
        let cfg = ChartConfig::default();
        let text = draw(|out| {
            horizontal(out, &labels(&["a", "b"]), &rows, &rows, &[Some(Color::Red)], &cfg, &Tagged)
        });
        assert_eq!(text, "a:  0.00 \nb: <91>▇▇▇▇▇</> 5.00 \n");
    }

    #[test]
    fn stacked_concatenates_and_sums() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 0.5]];
        let cfg = ChartConfig::default();
        let colors = [Some(Color::Red), Some(Color::Blue)];
        let text = draw(|out| {
            stacked(out, &labels(&["a", "b"]), &rows, &rows, &colors, &cfg, &Tagged)
        });
        assert_eq!(
            text,
            "a: <91>▇</><94>▇▇</> 3.00 \nb: <91>▇▇▇</><94>▏</> 3.50 \n"
        );
    }
}
