use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CursorError;

// Month indices (year * 12 + month0) that still fit an i32 year.
const FIRST_INDEX: i64 = i32::MIN as i64 * 12;
const LAST_INDEX: i64 = i32::MAX as i64 * 12 + 11;

/// The (year, month) pair shown by the calendar. `month0` is zero-based and
/// always in 0..=11; deserializing anything else fails.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "RawCursor")]
pub struct CalendarCursor {
    year: i32,
    month0: u32,
}

#[derive(Deserialize)]
struct RawCursor {
    year: i32,
    month0: u32,
}

impl TryFrom<RawCursor> for CalendarCursor {
    type Error = CursorError;

    fn try_from(raw: RawCursor) -> Result<Self, Self::Error> {
        if raw.month0 > 11 {
            return Err(CursorError::MonthOutOfRange(raw.month0));
        }
        Ok(Self { year: raw.year, month0: raw.month0 })
    }
}

impl CalendarCursor {
    /// Builds a cursor, carrying any `month0` past December into the year.
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0: 0 }.shifted(month0 as i64)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month0(self) -> u32 {
        self.month0
    }

    fn index(self) -> i64 {
        self.year as i64 * 12 + self.month0 as i64
    }

    /// Moves by `delta` months with year carry in either direction.
    /// Saturates at January of `i32::MIN` and December of `i32::MAX`.
    pub fn shifted(self, delta: i64) -> Self {
        let total = self.index().saturating_add(delta).clamp(FIRST_INDEX, LAST_INDEX);
        Self {
            year: total.div_euclid(12) as i32,
            month0: total.rem_euclid(12) as u32,
        }
    }

    /// Signed month distance to `other`, as taken by `shifted`.
    pub fn months_until(self, other: CalendarCursor) -> i64 {
        other.index() - self.index()
    }

    pub fn previous(self) -> Self {
        self.shifted(-1)
    }

    /// Concrete date for a day of this month, if chrono can represent it.
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Past,
    Today,
    Future,
}

/// Which month a grid cell's day number belongs to. Only cells of the
/// displayed month carry a temporal classification.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOrigin {
    Previous,
    Current(Temporal),
    Next,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub origin: CellOrigin,
}

impl DayCell {
    pub fn temporal(&self) -> Option<Temporal> {
        match self.origin {
            CellOrigin::Current(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self.origin, CellOrigin::Current(_))
    }

    /// Only future days of the displayed month can be booked.
    pub fn is_selectable(&self) -> bool {
        self.origin == CellOrigin::Current(Temporal::Future)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_carries_years() {
        let c = CalendarCursor::new(2024, 11);
        assert_eq!(c.shifted(1), CalendarCursor::new(2025, 0));
        assert_eq!(CalendarCursor::new(2024, 0).previous(), CalendarCursor::new(2023, 11));
        assert_eq!(c.shifted(-36), CalendarCursor::new(2021, 11));
        assert_eq!(c.shifted(25), CalendarCursor::new(2027, 0));
    }

    #[test]
    fn test_months_until() {
        let a = CalendarCursor::new(2024, 6);
        assert_eq!(a.months_until(CalendarCursor::new(2025, 1)), 7);
        assert_eq!(a.months_until(CalendarCursor::new(2023, 6)), -12);
        assert_eq!(a.shifted(a.months_until(CalendarCursor::new(2030, 3))), CalendarCursor::new(2030, 3));
    }

    #[test]
    fn test_new_normalizes_month() {
        let c = CalendarCursor::new(2024, 14);
        assert_eq!((c.year(), c.month0()), (2025, 2));
    }

    #[test]
    fn test_twelve_steps_return_next_year() {
        for month0 in 0..12 {
            let start = CalendarCursor::new(1999, month0);
            let mut c = start;
            for _ in 0..12 {
                c = c.shifted(1);
            }
            assert_eq!((c.year(), c.month0()), (2000, month0));
        }
    }

    #[test]
    fn test_far_jump_lands_on_target() {
        let start = CalendarCursor::new(2024, 6);
        let target = CalendarCursor::new(200_000_000, 0);
        let delta = start.months_until(target);
        assert!(delta > i32::MAX as i64);
        assert_eq!(start.shifted(delta), target);
        assert_eq!(target.shifted(target.months_until(start)), start);
    }

    #[test]
    fn test_shifted_saturates_at_year_range() {
        let last = CalendarCursor::new(i32::MAX, 11);
        assert_eq!(last.shifted(1), last);
        assert_eq!(last.shifted(i64::MAX), last);

        let first = CalendarCursor::new(i32::MIN, 0);
        assert_eq!(first.previous(), first);
        assert_eq!(first.shifted(i64::MIN), first);

        assert_eq!(first.months_until(last), LAST_INDEX - FIRST_INDEX);
        assert_eq!(first.shifted(first.months_until(last)), last);
    }

    #[test]
    fn test_deserialize_rejects_month_out_of_range() {
        let ok: CalendarCursor = serde_json::from_str(r#"{"year":2024,"month0":11}"#).unwrap();
        assert_eq!(ok, CalendarCursor::new(2024, 11));

        let err = serde_json::from_str::<CalendarCursor>(r#"{"year":2024,"month0":12}"#).unwrap_err();
        assert!(err.to_string().contains("month0 12"));

        let json = serde_json::to_string(&CalendarCursor::new(2025, 3)).unwrap();
        assert_eq!(json, r#"{"year":2025,"month0":3}"#);
    }

    #[test]
    fn test_selectable_only_future_current() {
        let future = DayCell { day: 10, origin: CellOrigin::Current(Temporal::Future) };
        let today = DayCell { day: 9, origin: CellOrigin::Current(Temporal::Today) };
        let next = DayCell { day: 1, origin: CellOrigin::Next };
        assert!(future.is_selectable());
        assert!(!today.is_selectable());
        assert!(!next.is_selectable());
        assert_eq!(next.temporal(), None);
        assert_eq!(today.temporal(), Some(Temporal::Today));
    }
}
