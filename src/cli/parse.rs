use clap::Parser;

use crate::core::{
    color::Color,
    constants::{DEFAULT_FORMAT, DEFAULT_WIDTH},
    format::ValueFormat,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(name = "termgraph", version, about = "Draw basic bar charts on the terminal")]
pub struct Cli {
    /// Data file, comma or space separated (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Width of the longest bar in characters
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Format of the value printed after each bar, e.g. `{:<5.2f}`
    #[arg(long, default_value = DEFAULT_FORMAT)]
    pub format: ValueFormat,

    /// String appended to every printed value
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Do not print the label column
    #[arg(long, alias = "ignore_labels", visible_alias = "no-labels")]
    pub ignore_labels: bool,

    /// Bar colour(s), one per category
    #[arg(long, value_enum, num_args = 1..)]
    pub color: Vec<Color>,

    /// Vertical bars
    #[arg(long)]
    pub vertical: bool,

    /// One bar per label made of every category's segment
    #[arg(long)]
    pub stacked: bool,

    /// Scale each category on its own
    #[arg(long, alias = "different_scale")]
    pub different_scale: bool,

    /// Shrink the width so every line fits in the terminal
    #[arg(long)]
    pub fit: bool,

    /// Never emit colour escape sequences
    #[arg(long)]
    pub no_color: bool,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
