//! Painter that makes colour regions visible in test output.

use crate::core::color::{Color, Painter};

/// `<91>text</>` instead of escape sequences.
pub struct Tagged;

impl Painter for Tagged {
    fn start(&self, buf: &mut String, color: Color) {
        buf.push_str(&format!("<{}>", color.code()));
    }

    fn reset(&self, buf: &mut String) {
        buf.push_str("</>");
    }
}
