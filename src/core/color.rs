//! Named SGR colours + the painter seam the renderers write through.

use std::fmt;

use clap::ValueEnum;

// --- Color ---
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Color {
    Red,
    Blue,
    Green,
    Magenta,
    Yellow,
    Black,
    Cyan,
}

impl Color {
    /// Fixed order used when stacked charts pick colours on their own.
    pub const PALETTE: [Self; 7] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Magenta,
        Self::Yellow,
        Self::Black,
        Self::Cyan,
    ];

    /// Bright-foreground SGR parameter.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Red => 91,
            Self::Blue => 94,
            Self::Green => 92,
            Self::Magenta => 95,
            Self::Yellow => 93,
            Self::Black => 90,
            Self::Cyan => 96,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Black => "black",
            Self::Cyan => "cyan",
        }
    }

    /// First `n` palette entries, cycling if `n` exceeds the palette.
    #[must_use]
    pub fn palette(n: usize) -> Vec<Self> {
        Self::PALETTE.iter().copied().cycle().take(n).collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// --- Painter ---

/// Capability the renderers use to colour a region of a line.
///
/// The buffer plays the role of the handle: `start` opens a coloured
/// region in it, `write` appends text, `reset` closes the region.
pub trait Painter {
    fn start(&self, buf: &mut String, color: Color);

    #[inline]
    fn write(&self, buf: &mut String, text: &str) {
        buf.push_str(text);
    }

    fn reset(&self, buf: &mut String);

    /// Write `text`, wrapped in `color` when one is assigned.
    fn paint(&self, buf: &mut String, color: Option<Color>, text: &str) {
        match color {
            Some(c) => {
                self.start(buf, c);
                self.write(buf, text);
                self.reset(buf);
            }
            None => self.write(buf, text),
        }
    }
}

/// ANSI escape sequences, `ESC[<code>m` ... `ESC[0m`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ansi;

impl Painter for Ansi {
    #[inline]
    fn start(&self, buf: &mut String, color: Color) {
        use std::fmt::Write;
        let _ = write!(buf, "\x1b[{}m", color.code());
    }

    #[inline]
    fn reset(&self, buf: &mut String) {
        buf.push_str("\x1b[0m");
    }
}

/// Drops every colour directive.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Painter for Plain {
    #[inline]
    fn start(&self, _buf: &mut String, _color: Color) {}

    #[inline]
    fn reset(&self, _buf: &mut String) {}
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(color: Color, text: &str) -> String {
    let mut buf = String::with_capacity(text.len() + 9);
    Ansi.paint(&mut buf, Some(color), text);
    buf
}
