//! Clock face rendering.
//!
//! Maps a [`ClockState`] onto the five text rows of a Mengenlehreuhr:
//! seconds lamp, five-hour row, one-hour row, five-minute row, one-minute
//! row, top to bottom.

use clap::ValueEnum;

use crate::cli::display::colors::{colorize_lamp, minutes_top_color, LampColor};
use crate::domain::models::ClockState;

/// Which pair of glyphs renders lit and dark lamps.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphSet {
    /// `Y` for lit lamps, `O` for dark ones
    #[default]
    Letters,
    /// `#` for lit lamps, `.` for dark ones
    Blocks,
}

impl GlyphSet {
    fn glyph(self, lit: bool) -> &'static str {
        match (self, lit) {
            (Self::Letters, true) => "Y",
            (Self::Letters, false) => "O",
            (Self::Blocks, true) => "#",
            (Self::Blocks, false) => ".",
        }
    }
}

/// Render the five rows of the clock face, one row per line.
///
/// With `use_colors` set, lamps are colored like the physical face (hour
/// lamps red, minute lamps yellow with red quarter-hour marks); without it
/// the output is the bare glyphs.
pub fn render_face(state: &ClockState, glyphs: GlyphSet, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(5);
    lines.push(render_row(
        &[state.seconds_lamp_on],
        |_| LampColor::Yellow,
        glyphs,
        use_colors,
    ));
    lines.push(render_row(
        &state.hours_top,
        |_| LampColor::Red,
        glyphs,
        use_colors,
    ));
    lines.push(render_row(
        &state.hours_bottom,
        |_| LampColor::Red,
        glyphs,
        use_colors,
    ));
    lines.push(render_row(
        &state.minutes_top,
        minutes_top_color,
        glyphs,
        use_colors,
    ));
    lines.push(render_row(
        &state.minutes_bottom,
        |_| LampColor::Yellow,
        glyphs,
        use_colors,
    ));
    lines.join("\n")
}

/// Whether colored output should be used (disabled by the `NO_COLOR` env var).
pub fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn render_row(
    lamps: &[bool],
    color_at: impl Fn(usize) -> LampColor,
    glyphs: GlyphSet,
    use_colors: bool,
) -> String {
    lamps
        .iter()
        .enumerate()
        .map(|(idx, &lit)| {
            let glyph = glyphs.glyph(lit);
            if use_colors {
                colorize_lamp(glyph, color_at(idx), lit).to_string()
            } else {
                glyph.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_face() {
        let state: ClockState = "13:25:45".parse().unwrap();
        assert_eq!(
            render_face(&state, GlyphSet::Letters, false),
            "O\nYYOO\nYYYO\nYYYYYOOOOOO\nOOOO"
        );
    }

    #[test]
    fn test_blocks_face() {
        let state: ClockState = "23:59:58".parse().unwrap();
        assert_eq!(
            render_face(&state, GlyphSet::Blocks, false),
            "#\n####\n###.\n###########\n####"
        );
    }

    #[test]
    fn test_midnight_letters_face() {
        let state: ClockState = "00:00:00".parse().unwrap();
        assert_eq!(
            render_face(&state, GlyphSet::Letters, false),
            "Y\nOOOO\nOOOO\nOOOOOOOOOOO\nOOOO"
        );
    }
}
