//! Error types for configuration and rendering.

use thiserror::Error;

/// Errors raised when a calendar setting is given an unusable value.
///
/// These are reported at the moment the value is set, never at render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cell width {width} is below the minimum of {min}")]
    CellWidthTooSmall { width: usize, min: usize },

    #[error("Cell height must be at least 1")]
    CellHeightTooSmall,

    #[error("Week start day must be 0..=6 (Sunday..Saturday), got {0}")]
    InvalidWeekStart(u8),

    #[error("Expected {expected} day names, got {found}")]
    DayNameCount { expected: usize, found: usize },

    #[error("Day name at index {index} is empty")]
    EmptyDayName { index: usize },

    #[error("Config serialization failed: {0}")]
    Serialization(String),
}

/// Errors returned by the calendar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
