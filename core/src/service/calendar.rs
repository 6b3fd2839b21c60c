use chrono::{Datelike, NaiveDate};

use crate::model::calendar::{CalendarCursor, CellOrigin, DayCell, Temporal};
use crate::time::{days_in_month, weekday_from_monday};

/// 6 rows of 7 days.
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// A Monday-first month grid, always exactly 42 cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: CalendarCursor,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The displayed month's cell for `day`, if the month has that day.
    pub fn cell_for_day(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.is_current() && c.day == day)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.cells
            .iter()
            .find(|c| c.origin == CellOrigin::Current(Temporal::Today))
    }
}

/// Lays out the month at `cursor`, classifying its days against `reference`.
///
/// Short months that start early in the week end with a row of next-month
/// filler; the grid is padded to 42 cells regardless.
pub fn build_grid(cursor: CalendarCursor, reference: NaiveDate) -> MonthGrid {
    let leading = weekday_from_monday(cursor.year(), cursor.month0(), 1);
    let prev = cursor.previous();
    let prev_last_day = days_in_month(prev.year(), prev.month0());
    let days = days_in_month(cursor.year(), cursor.month0());

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for day in (prev_last_day - leading + 1)..=prev_last_day {
        cells.push(DayCell { day, origin: CellOrigin::Previous });
    }

    let reference_key = (reference.year(), reference.month0(), reference.day());
    for day in 1..=days {
        let temporal = match (cursor.year(), cursor.month0(), day).cmp(&reference_key) {
            std::cmp::Ordering::Less => Temporal::Past,
            std::cmp::Ordering::Equal => Temporal::Today,
            std::cmp::Ordering::Greater => Temporal::Future,
        };
        cells.push(DayCell { day, origin: CellOrigin::Current(temporal) });
    }

    let remaining = GRID_CELLS - cells.len();
    for day in 1..=remaining as u32 {
        cells.push(DayCell { day, origin: CellOrigin::Next });
    }

    MonthGrid { cursor, cells }
}
