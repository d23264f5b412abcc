//! Handler for the `show` command.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::debug;

use crate::cli::display::format::{render_face, supports_color, GlyphSet};
use crate::cli::output::{self, CommandOutput};
use crate::domain::models::{ClockState, TimeOfDay};

/// Result payload for `show`.
#[derive(Serialize)]
pub struct ShowOutput {
    /// The converted time, echoed back zero-padded.
    pub time: String,
    /// Lamp states for the face.
    pub state: ClockState,
    #[serde(skip)]
    glyphs: GlyphSet,
    #[serde(skip)]
    use_colors: bool,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        render_face(&self.state, self.glyphs, self.use_colors)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "time": self.time,
            "state": self.state,
        })
    }
}

/// Handle the show command
pub fn execute(time: Option<String>, glyphs: GlyphSet, json: bool) -> Result<()> {
    let time = match time {
        Some(raw) => raw
            .parse::<TimeOfDay>()
            .context("Failed to parse time argument")?,
        None => TimeOfDay::from(Local::now().time()),
    };
    debug!(%time, ?glyphs, "converting time to lamp states");

    let state = ClockState::for_time(time);
    output::output(
        &ShowOutput {
            time: time.to_string(),
            state,
            glyphs,
            use_colors: supports_color(),
        },
        json,
    );

    Ok(())
}
