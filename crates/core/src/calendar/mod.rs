mod month;

pub use month::{days_in_month, is_leap_year, MonthLayout};
