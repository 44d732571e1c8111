//! Aggregates the "business logic" layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod validate;

// re-export frequently-used items for convenience
pub use bounds::find_min_max;
pub use color::{Ansi, Color, Painter, Plain, colorize};
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::{DEFAULT_FORMAT, DEFAULT_WIDTH, SM_TICK, TICK};
pub use data::{Dataset, ParseError, ParseErrorKind};
pub use error::{ConfigError, FormatError, GraphError};
pub use format::ValueFormat;
pub use validate::check_data;
