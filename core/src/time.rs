use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, NaiveDate};

use crate::model::calendar::CalendarCursor;

/// Supplies the reference day used to classify calendar cells.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day. Used by `--today` and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, `month0` being 0 for January.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of a date with Monday = 0 .. Sunday = 6.
///
/// Pure arithmetic (Sakamoto's method) so it stays total for years chrono
/// cannot represent.
pub fn weekday_from_monday(year: i32, month0: u32, day: u32) -> u32 {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let mut y = year as i64;
    if month0 < 2 {
        y -= 1;
    }
    let from_sunday = (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + OFFSETS[(month0 % 12) as usize]
        + day as i64)
        .rem_euclid(7);
    ((from_sunday + 6) % 7) as u32
}

/// Parses `YYYY-MM` into a calendar cursor.
pub fn parse_month(input: &str) -> Result<CalendarCursor> {
    let input = input.trim();
    let (year_str, month_str) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Expected YYYY-MM, got '{}'", input))?;

    let year: i32 = year_str
        .parse()
        .map_err(|_| anyhow!("Invalid year in '{}'", input))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| anyhow!("Invalid month in '{}'", input))?;

    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be between 01 and 12, got {}", month));
    }

    Ok(CalendarCursor::new(year, month - 1))
}

/// Parses `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow!("Could not parse date '{}': {}", input, e))
}

/// Cursor for the month containing `date`.
pub fn month_of(date: NaiveDate) -> CalendarCursor {
    CalendarCursor::new(date.year(), date.month0())
}
