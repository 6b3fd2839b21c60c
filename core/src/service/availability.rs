use chrono::NaiveDate;

use crate::model::slot::TimeSlot;
use crate::repository::{AvailabilitySource, PlaceholderAvailability};

/// Bookable hours of a working day, in display order.
pub const CANDIDATE_SLOTS: [&str; 9] = [
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// Turns a source's busy list into the ordered slot list for a day.
pub struct AvailabilityResolver<S: AvailabilitySource> {
    source: S,
}

impl<S: AvailabilitySource> AvailabilityResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn resolve(&self, date: Option<NaiveDate>) -> Vec<TimeSlot> {
        let busy = self.source.unavailable(date);
        CANDIDATE_SLOTS
            .iter()
            .map(|label| TimeSlot::new(*label, !busy.iter().any(|b| b == label)))
            .collect()
    }
}

impl Default for AvailabilityResolver<PlaceholderAvailability> {
    fn default() -> Self {
        Self::new(PlaceholderAvailability)
    }
}

/// Slot list for `date` under the placeholder availability rule.
pub fn resolve_slots(date: Option<NaiveDate>) -> Vec<TimeSlot> {
    AvailabilityResolver::default().resolve(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable(slots: &[TimeSlot]) -> Vec<&str> {
        slots
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.label.as_str())
            .collect()
    }

    #[test]
    fn test_slots_keep_candidate_order() {
        let slots = resolve_slots(None);
        let labels: Vec<&str> = slots.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, CANDIDATE_SLOTS);
    }

    #[test]
    fn test_placeholder_unavailability() {
        let d10 = NaiveDate::from_ymd_opt(2024, 7, 10);
        let d12 = NaiveDate::from_ymd_opt(2024, 7, 12);

        assert_eq!(resolve_slots(d10).len(), 9);
        assert_eq!(unavailable(&resolve_slots(d10)), vec!["12:00"]);
        assert_eq!(unavailable(&resolve_slots(d12)), vec!["12:00", "16:00"]);
        assert_eq!(unavailable(&resolve_slots(None)), vec!["12:00", "16:00"]);
    }

    struct FullyBooked;

    impl AvailabilitySource for FullyBooked {
        fn unavailable(&self, _date: Option<NaiveDate>) -> Vec<String> {
            CANDIDATE_SLOTS.iter().map(|s| s.to_string()).collect()
        }
    }

    struct UnknownLabels;

    impl AvailabilitySource for UnknownLabels {
        fn unavailable(&self, _date: Option<NaiveDate>) -> Vec<String> {
            vec!["09:00".to_string(), "19:30".to_string()]
        }
    }

    #[test]
    fn test_custom_source_swaps_in() {
        let resolver = AvailabilityResolver::new(FullyBooked);
        assert!(resolver.resolve(None).iter().all(|s| !s.available));

        let resolver = AvailabilityResolver::new(UnknownLabels);
        let slots = resolver.resolve(None);
        assert_eq!(slots.len(), 9);
        assert!(slots.iter().all(|s| s.available));
    }
}
