//! Serde helper functions for calendar settings.
//!
//! Settings files may name the first day of the week either by its
//! Sunday based index or by name.

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serializer};

use crate::names::{weekday_from_index, weekday_index};

#[derive(Deserialize)]
#[serde(untagged)]
enum WeekdayRepr {
    Index(u8),
    Name(String),
}

/// Deserialize a weekday from an index (0 = Sunday .. 6 = Saturday) or a name.
/// Accepts names in any case, full or abbreviated: "Sun", "sunday".
pub fn deserialize_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    match WeekdayRepr::deserialize(deserializer)? {
        WeekdayRepr::Index(index) => weekday_from_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "week start day must be 0..=6 (Sunday..Saturday), got {index}"
            ))
        }),
        WeekdayRepr::Name(name) => name
            .trim()
            .parse::<Weekday>()
            .map_err(|_| serde::de::Error::custom(format!("unknown weekday: {name}"))),
    }
}

/// Serialize a weekday as its Sunday based index.
pub fn serialize_weekday<S>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(weekday_index(*day) as u8)
}
