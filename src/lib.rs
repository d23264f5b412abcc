//! Berlinuhr - Berlin clock lamp-state converter
//!
//! Berlinuhr converts a wall-clock time into the lamp states of a Berlin
//! clock (Mengenlehreuhr): one blinking seconds lamp above four rows of
//! lamps that encode hours and minutes in a base-5/base-1 scheme. The two
//! hour rows count five hours and one hour per lamp; the two minute rows
//! count five minutes and one minute per lamp.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): pure conversion logic and domain models
//! - **CLI Layer** (`cli`): command-line interface and terminal rendering
//!
//! # Example
//!
//! ```
//! use berlinuhr::{ClockState, TimeOfDay};
//!
//! let time: TimeOfDay = "13:25:45".parse()?;
//! let state = ClockState::for_time(time);
//! assert_eq!(state.hours_top, [true, true, false, false]);
//! assert_eq!(state.hours_bottom, [true, true, true, false]);
//! # Ok::<(), berlinuhr::ClockError>(())
//! ```

pub mod cli;
pub mod domain;

// Re-export commonly used types for convenience
pub use domain::error::ClockError;
pub use domain::models::{ClockState, TimeOfDay};
