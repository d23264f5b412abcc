//! Lamp color mapping for CLI output.
//!
//! All coloring respects `NO_COLOR` env var automatically via the `colored` crate.

use colored::{ColoredString, Colorize};

/// A lamp's color on the physical clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampColor {
    /// Hour lamps and the quarter-hour minute lamps.
    Red,
    /// The remaining minute lamps and the seconds lamp.
    Yellow,
}

/// Returns a colored string for a rendered lamp glyph.
///
/// Lit lamps take their face color in bold; dark lamps are dimmed.
pub fn colorize_lamp(glyph: &str, color: LampColor, lit: bool) -> ColoredString {
    if !lit {
        return glyph.dimmed();
    }
    match color {
        LampColor::Red => glyph.red().bold(),
        LampColor::Yellow => glyph.yellow().bold(),
    }
}

/// Face color of the lamp at `index` (0-based) in the five-minute row.
///
/// Every third lamp marks 15, 30, or 45 minutes past and is red; the rest
/// are yellow.
pub fn minutes_top_color(index: usize) -> LampColor {
    if (index + 1) % 3 == 0 {
        LampColor::Red
    } else {
        LampColor::Yellow
    }
}
