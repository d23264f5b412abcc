use thiserror::Error;

/// Domain-level errors for time parsing and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The input string does not have the fixed `HH:MM:SS` shape.
    #[error("Malformed time string {0:?} (expected zero-padded HH:MM:SS)")]
    Format(String),

    /// A time field is outside its valid numeric bound.
    #[error("Invalid {field}: {value} (must be 0-{max})")]
    Range {
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: u8,
        /// Largest accepted value for the field.
        max: u8,
    },
}
