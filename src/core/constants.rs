//! A collection of constants.

/// One normalized unit of magnitude.
pub const TICK: char = '▇';
/// Drawn instead of nothing when a non-zero value rounds down to zero blocks.
pub const SM_TICK: char = '▏';

/// Bar width used when `--width` is omitted.
pub const DEFAULT_WIDTH: usize = 50;
/// Value format used when `--format` is omitted.
pub const DEFAULT_FORMAT: &str = "{:<5.2f}";

/// Terminal width assumed when it can't be queried.
pub const FALLBACK_COLUMNS: u16 = 80;
