//! CLI command handlers.

pub mod show;
