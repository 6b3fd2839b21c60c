use chrono::{Datelike, NaiveDate};

use crate::repository::traits::AvailabilitySource;

/// Deterministic stand-in for a scheduling backend: 12:00 is always taken,
/// 16:00 too on days divisible by three or when no date is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAvailability;

impl AvailabilitySource for PlaceholderAvailability {
    fn unavailable(&self, date: Option<NaiveDate>) -> Vec<String> {
        let busy: &[&str] = match date {
            None => &["12:00", "16:00"],
            Some(d) if d.day() % 3 == 0 => &["12:00", "16:00"],
            Some(_) => &["12:00"],
        };
        busy.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 7, d)
    }

    #[test]
    fn test_placeholder_rule() {
        let src = PlaceholderAvailability;
        assert_eq!(src.unavailable(None), vec!["12:00", "16:00"]);
        assert_eq!(src.unavailable(day(12)), vec!["12:00", "16:00"]);
        assert_eq!(src.unavailable(day(9)), vec!["12:00", "16:00"]);
        assert_eq!(src.unavailable(day(10)), vec!["12:00"]);
        assert_eq!(src.unavailable(day(31)), vec!["12:00"]);
    }
}
