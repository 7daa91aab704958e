//! Calendar configuration with validation.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::names::{weekday_from_index, DayNameProvider, DayNames};

/// Narrowest allowed cell, in characters.
pub const MINIMUM_CELL_WIDTH: usize = 3;

/// Default cell width, in characters.
pub const DEFAULT_CELL_WIDTH: usize = 15;

/// Default cell height, in lines.
pub const DEFAULT_CELL_HEIGHT: usize = 5;

/// Default first column of the grid.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Mon;

/// Settings for rendering a month grid.
///
/// Fields are only reachable through setters that validate, so a
/// `CalendarConfig` is always renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    week_start: Weekday,
    cell_width: usize,
    cell_height: usize,
    render_separators: bool,
    day_names: DayNames,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: DEFAULT_WEEK_START,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            render_separators: true,
            day_names: DayNames::default(),
        }
    }
}

impl CalendarConfig {
    /// Default settings with English day names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with day names taken from `provider`.
    pub fn with_names_from(provider: &impl DayNameProvider) -> Result<Self> {
        Ok(Self {
            day_names: DayNames::from_provider(provider)?,
            ..Self::default()
        })
    }

    /// Parses settings from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: CalendarSettings = serde_json::from_str(json)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        Self::try_from(settings)
    }

    /// Serializes the settings to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&CalendarSettings::from(self))
            .map_err(|e| ConfigError::Serialization(e.to_string()).into())
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    pub fn render_separators(&self) -> bool {
        self.render_separators
    }

    pub fn day_names(&self) -> &DayNames {
        &self.day_names
    }

    pub fn set_week_start(&mut self, day: Weekday) {
        self.week_start = day;
    }

    /// Sets the first column from a Sunday based index (0..=6).
    pub fn set_week_start_index(&mut self, index: u8) -> Result<()> {
        self.week_start = weekday_from_index(index).ok_or(ConfigError::InvalidWeekStart(index))?;
        Ok(())
    }

    /// Sets the cell width. Fails if it is below [`MINIMUM_CELL_WIDTH`].
    pub fn set_cell_width(&mut self, width: usize) -> Result<()> {
        if width < MINIMUM_CELL_WIDTH {
            return Err(ConfigError::CellWidthTooSmall {
                width,
                min: MINIMUM_CELL_WIDTH,
            }
            .into());
        }
        self.cell_width = width;
        Ok(())
    }

    /// Sets the number of lines per cell, including the line with the day number.
    pub fn set_cell_height(&mut self, height: usize) -> Result<()> {
        if height == 0 {
            return Err(ConfigError::CellHeightTooSmall.into());
        }
        self.cell_height = height;
        Ok(())
    }

    pub fn set_render_separators(&mut self, render: bool) {
        self.render_separators = render;
    }

    pub fn set_day_names(&mut self, names: DayNames) {
        self.day_names = names;
    }

    /// Replaces the long and short names of one weekday.
    pub fn set_day_name(
        &mut self,
        day: Weekday,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Result<()> {
        self.day_names.set(day, long, short)?;
        Ok(())
    }

    pub fn with_week_start(mut self, day: Weekday) -> Self {
        self.set_week_start(day);
        self
    }

    pub fn with_cell_width(mut self, width: usize) -> Result<Self> {
        self.set_cell_width(width)?;
        Ok(self)
    }

    pub fn with_cell_height(mut self, height: usize) -> Result<Self> {
        self.set_cell_height(height)?;
        Ok(self)
    }

    pub fn with_render_separators(mut self, render: bool) -> Self {
        self.set_render_separators(render);
        self
    }

    pub fn with_day_names(mut self, names: DayNames) -> Self {
        self.set_day_names(names);
        self
    }
}

/// Unvalidated, serializable form of [`CalendarConfig`].
///
/// Missing fields take their defaults; missing name tables fall back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    #[serde(
        deserialize_with = "crate::serde::deserialize_weekday",
        serialize_with = "crate::serde::serialize_weekday"
    )]
    pub week_start: Weekday,
    pub cell_width: usize,
    pub cell_height: usize,
    pub render_separators: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_names_long: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_names_short: Option<Vec<String>>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self::from(&CalendarConfig::default())
    }
}

impl From<&CalendarConfig> for CalendarSettings {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            week_start: config.week_start,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            render_separators: config.render_separators,
            day_names_long: Some(config.day_names.long_names().to_vec()),
            day_names_short: Some(config.day_names.short_names().to_vec()),
        }
    }
}

impl TryFrom<CalendarSettings> for CalendarConfig {
    type Error = crate::error::CalendarError;

    fn try_from(settings: CalendarSettings) -> Result<Self> {
        let defaults = DayNames::default();
        let day_names = DayNames::from_vecs(
            settings
                .day_names_long
                .unwrap_or_else(|| defaults.long_names().to_vec()),
            settings
                .day_names_short
                .unwrap_or_else(|| defaults.short_names().to_vec()),
        )?;

        let mut config = CalendarConfig::default()
            .with_week_start(settings.week_start)
            .with_render_separators(settings.render_separators)
            .with_day_names(day_names);
        config.set_cell_width(settings.cell_width)?;
        config.set_cell_height(settings.cell_height)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;
    use crate::names::{EnglishDayNames, WEEKDAYS};

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::new();
        assert_eq!(config.week_start(), Weekday::Mon);
        assert_eq!(config.cell_width(), 15);
        assert_eq!(config.cell_height(), 5);
        assert!(config.render_separators());
        assert_eq!(config.day_names().long(Weekday::Mon), "Monday");
    }

    #[test]
    fn test_cell_width_boundary() {
        let mut config = CalendarConfig::new();
        assert!(config.set_cell_width(MINIMUM_CELL_WIDTH).is_ok());
        assert_eq!(config.cell_width(), 3);

        let result = config.set_cell_width(MINIMUM_CELL_WIDTH - 1);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidConfiguration(
                ConfigError::CellWidthTooSmall { width: 2, min: 3 }
            ))
        ));
        // Rejected values leave the previous setting in place
        assert_eq!(config.cell_width(), 3);
    }

    #[test]
    fn test_cell_height_boundary() {
        let mut config = CalendarConfig::new();
        assert!(config.set_cell_height(1).is_ok());
        assert_eq!(config.cell_height(), 1);

        let result = config.set_cell_height(0);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidConfiguration(
                ConfigError::CellHeightTooSmall
            ))
        ));
        assert_eq!(config.cell_height(), 1);
    }

    #[test]
    fn test_week_start_index() {
        let mut config = CalendarConfig::new();
        config.set_week_start_index(0).unwrap();
        assert_eq!(config.week_start(), Weekday::Sun);

        let result = config.set_week_start_index(7);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidConfiguration(
                ConfigError::InvalidWeekStart(7)
            ))
        ));
        assert_eq!(config.week_start(), Weekday::Sun);
    }

    #[test]
    fn test_set_day_name() {
        let mut config = CalendarConfig::new();
        config.set_day_name(Weekday::Mon, "Moon", "Moo").unwrap();
        assert_eq!(config.day_names().long(Weekday::Mon), "Moon");
        assert_eq!(config.day_names().short(Weekday::Mon), "Moo");

        assert!(config.set_day_name(Weekday::Mon, "", "Moo").is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = CalendarConfig::new()
            .with_week_start(Weekday::Sun)
            .with_render_separators(false)
            .with_cell_width(8)
            .and_then(|c| c.with_cell_height(1))
            .unwrap();
        assert_eq!(config.week_start(), Weekday::Sun);
        assert_eq!(config.cell_width(), 8);
        assert_eq!(config.cell_height(), 1);
        assert!(!config.render_separators());
    }

    #[test]
    fn test_with_names_from_provider() {
        let config = CalendarConfig::with_names_from(&EnglishDayNames).unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            CalendarConfig::from_json(r#"{"week_start": "Sunday", "cell_width": 8}"#).unwrap();
        assert_eq!(config.week_start(), Weekday::Sun);
        assert_eq!(config.cell_width(), 8);
        assert_eq!(config.cell_height(), DEFAULT_CELL_HEIGHT);
        assert_eq!(config.day_names().long(Weekday::Sun), WEEKDAYS[0]);
    }

    #[test]
    fn test_from_json_validates() {
        let result = CalendarConfig::from_json(r#"{"cell_width": 2}"#);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidConfiguration(
                ConfigError::CellWidthTooSmall { .. }
            ))
        ));

        let result = CalendarConfig::from_json(r#"{"cell_height": 0}"#);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidConfiguration(
                ConfigError::CellHeightTooSmall
            ))
        ));

        let result = CalendarConfig::from_json(r#"{"day_names_short": ["S", "M"]}"#);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidConfiguration(
                ConfigError::DayNameCount { found: 2, .. }
            ))
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = CalendarConfig::from_json("{not json");
        assert!(matches!(
            result,
            Err(CalendarError::InvalidConfiguration(
                ConfigError::Serialization(_)
            ))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_custom_names() {
        let mut config = CalendarConfig::new().with_week_start(Weekday::Sat);
        config.set_day_name(Weekday::Fri, "Valar", "Val").unwrap();

        let json = config.to_json().unwrap();
        assert!(json.contains(r#""week_start":6"#));

        let restored = CalendarConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }
}
