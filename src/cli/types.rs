//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::display::format::GlyphSet;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "berlinuhr")]
#[command(about = "Berlin clock (Mengenlehreuhr) lamp-state converter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the lamp state for a time (current local time if omitted)
    Show {
        /// Time to display, as zero-padded 24-hour HH:MM:SS
        time: Option<String>,

        /// Glyph convention for rendering lamps
        #[arg(short, long, value_enum, env = "BERLINUHR_GLYPHS", default_value = "letters")]
        glyphs: GlyphSet,
    },
}
