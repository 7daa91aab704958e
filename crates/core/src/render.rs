//! Month grid rendering.
//!
//! A grid is a header row of weekday names followed by one block of
//! `cell_height` lines per week. Every line starts with `|` and closes each
//! of its seven cells with `|`. Day numbers appear on the first line of a
//! week block only; cells outside the month stay blank.

use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::MonthLayout;
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::grid::{Grid, LineEnding};
use crate::names::{week_columns, DayNameFormat, DAYS_IN_WEEK};

/// Renders a month as text, using the platform line ending.
pub fn render(config: &CalendarConfig, year: i32, month: u32) -> Result<String> {
    render_grid(config, year, month).map(|grid| grid.to_text(LineEnding::native()))
}

/// Renders the month containing `date`.
pub fn render_date(config: &CalendarConfig, date: NaiveDate) -> Result<String> {
    render(config, date.year(), date.month())
}

/// Renders the month containing today's local date.
pub fn render_current_month(config: &CalendarConfig) -> Result<String> {
    render_date(config, Local::now().date_naive())
}

/// Renders a month into its lines.
pub fn render_grid(config: &CalendarConfig, year: i32, month: u32) -> Result<Grid> {
    let layout = MonthLayout::new(year, month)?;
    let week_start = config.week_start();
    let width = config.cell_width();
    let height = config.cell_height();
    let weeks = layout.week_count(week_start);

    tracing::debug!(
        year,
        month,
        first_weekday = %layout.first_weekday,
        days_in_month = layout.days_in_month,
        weeks,
        "Rendering month grid"
    );

    let separator = config.render_separators().then(|| separator_line(width));
    let separator_rows = usize::from(separator.is_some());
    let mut grid = Grid::with_capacity(1 + separator_rows + weeks * (height + separator_rows));

    grid.push(header_line(config));
    if let Some(separator) = &separator {
        grid.push(separator.clone());
    }

    let last_day = i64::from(layout.days_in_month);
    let mut day_counter = layout.first_day_counter(week_start);

    while day_counter <= last_day {
        tracing::trace!(day_counter, "Rendering week row");

        for cell_row in 0..height {
            let mut line = String::with_capacity(line_width(width));
            line.push('|');
            for column in 0..DAYS_IN_WEEK as i64 {
                let day = day_counter + column;
                if cell_row == 0 && (1..=last_day).contains(&day) {
                    push_cell(&mut line, &day.to_string(), width);
                } else {
                    push_blank(&mut line, width);
                }
            }
            grid.push(line);
        }

        if let Some(separator) = &separator {
            grid.push(separator.clone());
        }

        day_counter += DAYS_IN_WEEK as i64;
    }

    Ok(grid)
}

fn header_line(config: &CalendarConfig) -> String {
    let width = config.cell_width();
    let format = DayNameFormat::for_cell_width(width);
    let names = config.day_names();

    let mut line = String::with_capacity(line_width(width));
    line.push('|');
    for day in week_columns(config.week_start()) {
        push_cell(&mut line, names.label(day, format), width);
    }
    line
}

fn separator_line(width: usize) -> String {
    let mut line = String::with_capacity(line_width(width));
    line.push('|');
    for _ in 0..DAYS_IN_WEEK {
        line.push_str(&"-".repeat(width));
        line.push('|');
    }
    line
}

/// Right-aligns `text` in `width - 1` columns, then a space and the cell border.
/// Text wider than the field is not truncated. Padding counts `char`s, so a
/// character outside the Basic Multilingual Plane occupies one column.
fn push_cell(line: &mut String, text: &str, width: usize) {
    let field = width.saturating_sub(1);
    line.push_str(&format!("{text:>field$} |"));
}

fn push_blank(line: &mut String, width: usize) {
    line.push_str(&" ".repeat(width));
    line.push('|');
}

fn line_width(width: usize) -> usize {
    1 + DAYS_IN_WEEK * (width + 1)
}
