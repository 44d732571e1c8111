//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{Ansi, Color, Painter, Plain, colorize},
    config::{ChartConfig, ChartConfigBuilder},
    data::{Dataset, ParseError, read_data, read_data_from_path},
    error::{ConfigError, FormatError, GraphError},
    format::ValueFormat,
    validate::check_data,
};

pub use render::{Mode, VerticalAccumulator, normalize, render};

/// Validate `data` and draw it to stdout with ANSI colours.
pub fn plot_data(data: &Dataset, colors: &[Color], cfg: &ChartConfig) -> Result<(), GraphError> {
    check_data(data, colors, cfg)?;
    let mut out = std::io::stdout().lock();
    render(&mut out, data, colors, cfg, &Ansi)
}
