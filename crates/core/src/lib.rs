//! Fixed-width ASCII month grids - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Gregorian month facts (leap years, month lengths, first weekday)
//! - Calendar configuration with validation
//! - Weekday name tables and a provider trait for localized names
//! - The month grid renderer
//!
//! # Example
//!
//! ```
//! use asciical_core::{render_grid, CalendarConfig, LineEnding};
//! use chrono::Weekday;
//!
//! let config = CalendarConfig::new()
//!     .with_week_start(Weekday::Sun)
//!     .with_cell_width(5)
//!     .and_then(|c| c.with_cell_height(1))
//!     .unwrap();
//!
//! let grid = render_grid(&config, 2021, 11).unwrap();
//! let text = grid.to_text(LineEnding::Lf);
//! assert!(text.starts_with("| Sun | Mon | Tue |"));
//!
//! // Invalid values are rejected when they are set
//! assert!(CalendarConfig::new().with_cell_width(2).is_err());
//! ```

pub mod calendar;
mod config;
mod error;
mod grid;
mod names;
mod render;
mod serde;

pub use config::{
    CalendarConfig, CalendarSettings, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_WEEK_START,
    MINIMUM_CELL_WIDTH,
};
pub use error::{CalendarError, ConfigError, Result};
pub use grid::{Grid, LineEnding};
pub use names::{
    week_columns, weekday_from_index, weekday_index, DayNameFormat, DayNameProvider, DayNames,
    EnglishDayNames, DAYS_IN_WEEK, WEEKDAYS, WEEKDAYS_ABBR,
};
pub use render::{render, render_current_month, render_date, render_grid};
