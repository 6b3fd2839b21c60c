use chrono::{Datelike, NaiveDate};

use crate::error::IncompleteError;
use crate::model::booking::{BookingDraft, DraftSummary, SummaryLine};
use crate::model::locale::Locale;
use crate::model::service::Service;

/// `"{day} {month name} {year}"`, e.g. `9 Июль 2024`.
pub fn format_booking_date(date: NaiveDate, locale: Locale) -> String {
    format!("{} {} {}", date.day(), locale.month_name(date.month0()), date.year())
}

/// Combines the visitor's choices into a draft. Pure: same inputs, same draft.
/// A missing service is fine; a missing date or time is not.
pub fn assemble_draft(
    service: Option<&Service>,
    date: Option<NaiveDate>,
    time: Option<&str>,
    locale: Locale,
) -> Result<BookingDraft, IncompleteError> {
    let (date, time) = match (date, time) {
        (Some(d), Some(t)) => (d, t),
        (None, Some(_)) => return Err(IncompleteError::MissingDate),
        (Some(_), None) => return Err(IncompleteError::MissingTime),
        (None, None) => return Err(IncompleteError::MissingDateAndTime),
    };

    let labels = locale.labels();
    let summary = DraftSummary {
        service: SummaryLine {
            label: labels.service,
            value: service
                .map(|s| s.to_string())
                .unwrap_or_else(|| labels.not_chosen.to_string()),
        },
        date: SummaryLine {
            label: labels.date,
            value: format_booking_date(date, locale),
        },
        time: SummaryLine {
            label: labels.time,
            value: time.to_string(),
        },
    };

    Ok(BookingDraft {
        service: service.cloned(),
        date,
        time: time.to_string(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn july(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 7, d)
    }

    #[test]
    fn test_without_service_renders_not_chosen() {
        let draft = assemble_draft(None, july(10), Some("14:00"), Locale::En).unwrap();
        assert_eq!(draft.summary.service.value, "not chosen");
        assert_eq!(draft.summary.date.value, "10 July 2024");
        assert_eq!(draft.summary.time.value, "14:00");
        assert_eq!(
            draft.to_string(),
            "Service: not chosen\nDate: 10 July 2024\nTime: 14:00"
        );
    }

    #[test]
    fn test_with_service_russian() {
        let service = Service::new("Мужская стрижка", "2 500 ₽");
        let draft = assemble_draft(Some(&service), july(10), Some("14:00"), Locale::Ru).unwrap();
        assert_eq!(draft.summary.service.to_string(), "Услуга: Мужская стрижка - 2 500 ₽");
        assert_eq!(draft.summary.date.to_string(), "Дата: 10 Июль 2024");
        assert_eq!(draft.service, Some(service));
    }

    #[test]
    fn test_missing_parts_are_reported() {
        let service = Service::new("Beard trim", "$20");
        assert_eq!(
            assemble_draft(Some(&service), None, Some("14:00"), Locale::En),
            Err(IncompleteError::MissingDate)
        );
        assert_eq!(
            assemble_draft(None, july(10), None, Locale::En),
            Err(IncompleteError::MissingTime)
        );
        assert_eq!(
            assemble_draft(Some(&service), None, None, Locale::En),
            Err(IncompleteError::MissingDateAndTime)
        );
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let service = Service::new("Beard trim", "$20");
        let a = assemble_draft(Some(&service), july(12), Some("10:00"), Locale::En);
        let b = assemble_draft(Some(&service), july(12), Some("10:00"), Locale::En);
        assert_eq!(a, b);
    }
}
