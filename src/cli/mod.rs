//! Command-line interface.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

// Re-export commonly used items
pub use display::format::GlyphSet;
pub use types::{Cli, Commands};

/// Report a failed command in the requested output mode and exit nonzero.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
