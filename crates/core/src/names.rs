//! Weekday names and how they are chosen for a given cell width.

use chrono::Weekday;

use crate::error::ConfigError;

/// Number of days in a week, and the number of entries in each name table.
pub const DAYS_IN_WEEK: usize = 7;

/// Sunday based weekdays in English.
pub const WEEKDAYS: [&str; DAYS_IN_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// [`WEEKDAYS`] abbreviated to 3 letters.
pub const WEEKDAYS_ABBR: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Index of a weekday in the name tables (Sunday = 0 .. Saturday = 6).
pub fn weekday_index(day: Weekday) -> usize {
    day.num_days_from_sunday() as usize
}

/// Converts a Sunday based index (0..=6) into a weekday.
///
/// Note that chrono's own `TryFrom<u8>` counts from Monday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1..=6 => Weekday::try_from(index - 1).ok(),
        _ => None,
    }
}

/// The weekdays of a week starting on `start`, in column order.
pub fn week_columns(start: Weekday) -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(start), |day| Some(day.succ())).take(DAYS_IN_WEEK)
}

/// Which form of the weekday name a header cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNameFormat {
    /// First character of the short name.
    Initial,
    /// The short name in full.
    Short,
    /// The long name in full.
    Long,
}

impl DayNameFormat {
    /// Picks the name form that fits a cell of `cell_width` characters.
    pub fn for_cell_width(cell_width: usize) -> Self {
        match cell_width {
            0..=3 => DayNameFormat::Initial,
            4..=9 => DayNameFormat::Short,
            _ => DayNameFormat::Long,
        }
    }
}

/// Supplies localized weekday names.
pub trait DayNameProvider {
    /// Full name, e.g. "Monday".
    fn long_name(&self, day: Weekday) -> String;
    /// Abbreviated name, e.g. "Mon".
    fn short_name(&self, day: Weekday) -> String;
}

/// English weekday names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDayNames;

impl DayNameProvider for EnglishDayNames {
    fn long_name(&self, day: Weekday) -> String {
        WEEKDAYS[weekday_index(day)].to_string()
    }

    fn short_name(&self, day: Weekday) -> String {
        WEEKDAYS_ABBR[weekday_index(day)].to_string()
    }
}

/// Long and short weekday names, indexed Sunday = 0 .. Saturday = 6.
///
/// Every entry is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNames {
    long: [String; DAYS_IN_WEEK],
    short: [String; DAYS_IN_WEEK],
}

impl DayNames {
    /// Creates a name table, rejecting empty entries.
    pub fn new<S: Into<String>>(
        long: [S; DAYS_IN_WEEK],
        short: [S; DAYS_IN_WEEK],
    ) -> Result<Self, ConfigError> {
        let names = Self {
            long: long.map(Into::into),
            short: short.map(Into::into),
        };
        names.validate()?;
        Ok(names)
    }

    /// Creates a name table from vectors, which must hold exactly seven entries each.
    pub fn from_vecs(long: Vec<String>, short: Vec<String>) -> Result<Self, ConfigError> {
        let long = to_table(long)?;
        let short = to_table(short)?;
        Self::new(long, short)
    }

    /// Collects the names offered by a provider.
    pub fn from_provider(provider: &impl DayNameProvider) -> Result<Self, ConfigError> {
        let long = std::array::from_fn(|i| provider.long_name(nth_weekday(i)));
        let short = std::array::from_fn(|i| provider.short_name(nth_weekday(i)));
        Self::new(long, short)
    }

    pub fn long(&self, day: Weekday) -> &str {
        &self.long[weekday_index(day)]
    }

    pub fn short(&self, day: Weekday) -> &str {
        &self.short[weekday_index(day)]
    }

    pub fn long_names(&self) -> &[String; DAYS_IN_WEEK] {
        &self.long
    }

    pub fn short_names(&self) -> &[String; DAYS_IN_WEEK] {
        &self.short
    }

    /// The header label for `day` in the given format.
    pub fn label(&self, day: Weekday, format: DayNameFormat) -> &str {
        match format {
            DayNameFormat::Initial => first_char(self.short(day)),
            DayNameFormat::Short => self.short(day),
            DayNameFormat::Long => self.long(day),
        }
    }

    /// Replaces the names of a single weekday.
    pub fn set(
        &mut self,
        day: Weekday,
        long: impl Into<String>,
        short: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let index = weekday_index(day);
        let long = long.into();
        let short = short.into();
        check_name(index, &long)?;
        check_name(index, &short)?;
        self.long[index] = long;
        self.short[index] = short;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, name) in self.long.iter().enumerate() {
            check_name(index, name)?;
        }
        for (index, name) in self.short.iter().enumerate() {
            check_name(index, name)?;
        }
        Ok(())
    }
}

impl Default for DayNames {
    fn default() -> Self {
        Self {
            long: WEEKDAYS.map(String::from),
            short: WEEKDAYS_ABBR.map(String::from),
        }
    }
}

fn nth_weekday(index: usize) -> Weekday {
    week_columns(Weekday::Sun)
        .nth(index)
        .unwrap_or(Weekday::Sun)
}

fn check_name(index: usize, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyDayName { index });
    }
    Ok(())
}

fn to_table(names: Vec<String>) -> Result<[String; DAYS_IN_WEEK], ConfigError> {
    let found = names.len();
    names.try_into().map_err(|_| ConfigError::DayNameCount {
        expected: DAYS_IN_WEEK,
        found,
    })
}

fn first_char(name: &str) -> &str {
    match name.char_indices().nth(1) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}
