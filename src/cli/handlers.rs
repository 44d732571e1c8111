use std::{
    io::{Write, stdout},
    time::Instant,
};

use log::debug;

use crate::{
    core::{
        bounds::{fit_width, terminal_columns},
        color::{Ansi, Plain},
        config::ChartConfig,
        data::{Dataset, read_data_from_path},
        error::GraphError,
        validate::check_data,
    },
    render::render,
};

use super::parse::Cli;

pub fn chart(a: Cli) -> Result<(), GraphError> {
    let mut cfg = ChartConfig::builder()
        .width(a.width)
        .format(a.format)
        .suffix(a.suffix)
        .show_labels(!a.ignore_labels)
        .vertical(a.vertical)
        .stacked(a.stacked)
        .different_scale(a.different_scale)
        .build()?;

    let mut out = stdout().lock();
    write!(out, "{}", banner(&a.file))?;

    let t_ingest = Instant::now();
    let data = read_data_from_path(&a.file)?;
    debug!(
        "read {} rows ({} categories) in {} µs",
        data.rows.len(),
        data.category_count(),
        t_ingest.elapsed().as_micros()
    );

    check_data(&data, &a.color, &cfg)?;

    if a.fit && !cfg.vertical {
        cfg.width = fitted_width(&data, &cfg, terminal_columns());
        debug!("fitted width to {}", cfg.width);
    }

    if a.no_color {
        render(&mut out, &data, &a.color, &cfg, &Plain)
    } else {
        render(&mut out, &data, &a.color, &cfg, &Ansi)
    }
}

/// Header naming the input source.
fn banner(file: &str) -> String {
    let text = format!(
        "Reading data from {}",
        if file == "-" { "stdin" } else { file }
    );
    let rule = "-".repeat(text.chars().count());
    format!("\n{rule}\n{text}\n{rule}\n\n")
}

/// Bar width that keeps the widest line inside `columns`.
///
/// Stacked bars share the width between their segments.
fn fitted_width(data: &Dataset, cfg: &ChartConfig, columns: usize) -> usize {
    let label_width = data
        .labels
        .iter()
        .map(|l| cfg.label_prefix(l).chars().count())
        .max()
        .unwrap_or(0);
    let tail_width = data
        .rows
        .iter()
        .flat_map(|r| r.iter().copied().chain(std::iter::once(r.iter().sum::<f64>())))
        .map(|v| cfg.tail(v).chars().count())
        .max()
        .unwrap_or(0);

    let width = fit_width(cfg.width, columns, label_width, tail_width);
    if cfg.stacked {
        (width / data.category_count().max(1)).max(1)
    } else {
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_source() {
        assert_eq!(
            banner("-"),
            "\n-----------------------\nReading data from stdin\n-----------------------\n\n"
        );
        assert!(banner("ex1.dat").contains("Reading data from ex1.dat\n"));
    }

    #[test]
    fn fitted_width_leaves_room_for_label_and_tail() {
        let data = Dataset::new(
            Vec::new(),
            vec!["2007".into(), "2008".into()],
            vec![vec![20.5], vec![100.0]],
        );
        let cfg = ChartConfig::default();
        // "2007: " is 6 wide, " 100.00" is 7 wide.
        assert_eq!(fitted_width(&data, &cfg, 40), 26);
        assert_eq!(fitted_width(&data, &cfg, 200), 50);
    }

    #[test]
    fn stacked_segments_share_the_fitted_width() {
        let data = Dataset::new(Vec::new(), vec!["a".into()], vec![vec![1.0, 2.0]]);
        let cfg = ChartConfig::builder().stacked(true).build().unwrap();
        // "a: " 3 wide, " 3.00 " 6 wide: 40 - 10 = 30, split in two.
        assert_eq!(fitted_width(&data, &cfg, 40), 15);
    }
}
