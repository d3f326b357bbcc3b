//! Calendar domain logic for the food diary.
//!
//! This module contains the date arithmetic behind the diary header arrows
//! and the date-picker modal: day and month shifting, month grid generation
//! and date formatting. It has no dependency on the ledger, so every edge
//! case (month/year rollover, leap years) can be tested directly.

use chrono::{Datelike, Duration, Months, NaiveDate};
use log::debug;
use shared::{CalendarCell, MonthGrid};

/// Weekday column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),

    #[error("Month {month}/{year} is outside the supported date range")]
    OutOfRange { year: i32, month: u32 },
}

/// Calendar service that handles all calendar-related date arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the Sunday-first grid for a month: leading blanks for the
    /// weekday offset of the 1st, then one cell per day, no trailing padding
    pub fn build_month_grid(&self, year: i32, month: u32) -> Result<MonthGrid, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::OutOfRange { year, month })?;

        let days_in_month = self.days_in_month(year, month);
        let first_day = first_of_month.weekday().num_days_from_sunday();

        let mut cells = Vec::with_capacity((first_day + days_in_month) as usize);
        cells.extend((0..first_day).map(|_| CalendarCell::Blank));
        cells.extend(
            (1..=days_in_month)
                .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
                .map(CalendarCell::Day),
        );

        debug!(
            "🗓️ Built grid for {}/{}: {} blanks, {} days",
            month, year, first_day, days_in_month
        );

        Ok(MonthGrid {
            year,
            month,
            first_day_of_week: first_day,
            cells,
        })
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, year: i32, month: u32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Move a date by a number of days (negative goes back).
    /// A move past the representable range leaves the date unchanged.
    pub fn shift_date(&self, date: NaiveDate, days: i64) -> NaiveDate {
        date.checked_add_signed(Duration::days(days)).unwrap_or(date)
    }

    /// Move a date by whole months. The day of month is clamped to the
    /// target month's length, so Jan 31 + 1 month is the last day of February.
    pub fn shift_month(&self, date: NaiveDate, months: i32) -> NaiveDate {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            date.checked_add_months(step)
        } else {
            date.checked_sub_months(step)
        };
        shifted.unwrap_or(date)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Ledger key format, e.g. "2025-06-16"
    pub fn date_key(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a date for the diary header, e.g. "Monday, June 16, 2025"
    pub fn format_display_date(&self, date: NaiveDate) -> String {
        format!(
            "{}, {} {}, {}",
            date.format("%A"),
            self.month_name(date.month()),
            date.day(),
            date.year()
        )
    }

    /// Title of the date-picker, e.g. "June 2025"
    pub fn format_month_title(&self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(month), year)
    }
}
