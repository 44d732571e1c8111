pub mod chart;
pub mod legend;
pub mod row;
pub mod scale;
pub mod vertical;

#[cfg(test)]
pub(crate) mod test_support;

pub use chart::{Mode, render, resolve_colors};
pub use scale::{block_count, normalize};
pub use vertical::VerticalAccumulator;
