use chrono::{Datelike, NaiveDate};

use crate::error::IncompleteError;
use crate::model::booking::BookingDraft;
use crate::model::calendar::CalendarCursor;
use crate::model::config::ShopConfig;
use crate::model::locale::Locale;
use crate::model::service::Service;
use crate::model::slot::TimeSlot;
use crate::repository::{AvailabilitySource, PlaceholderAvailability};
use crate::service::availability::AvailabilityResolver;
use crate::service::calendar::{build_grid, MonthGrid};
use crate::service::draft::assemble_draft;
use crate::time::{month_of, parse_month, Clock};

/// What a successful transition changed. Views re-read the session after
/// any event; ignored transitions produce none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MonthChanged(CalendarCursor),
    DateSelected(NaiveDate),
    SelectionCleared,
    TimeSelected(String),
    ServiceChosen(Service),
    ServiceCleared,
}

/// State of one visitor's booking: displayed month, chosen date, time and
/// service. Owned by the front end; every mutation goes through a transition.
pub struct BookingSession<C: Clock, S: AvailabilitySource = PlaceholderAvailability> {
    clock: C,
    resolver: AvailabilityResolver<S>,
    locale: Locale,
    catalog: Vec<Service>,

    cursor: CalendarCursor,
    selected_date: Option<NaiveDate>,
    selected_time: Option<String>,
    selected_service: Option<usize>,
    slots: Vec<TimeSlot>,
}

impl<C: Clock> BookingSession<C, PlaceholderAvailability> {
    pub fn new(clock: C, config: &ShopConfig) -> Self {
        Self::with_source(clock, PlaceholderAvailability, config)
    }
}

impl<C: Clock, S: AvailabilitySource> BookingSession<C, S> {
    pub fn with_source(clock: C, source: S, config: &ShopConfig) -> Self {
        let cursor = config
            .start_month
            .as_deref()
            .and_then(|m| match parse_month(m) {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!(start_month = m, error = %e, "ignoring start_month");
                    None
                }
            })
            .unwrap_or_else(|| month_of(clock.today()));

        let resolver = AvailabilityResolver::new(source);
        let slots = resolver.resolve(None);

        Self {
            clock,
            resolver,
            locale: config.locale,
            catalog: config.services.clone(),
            cursor,
            selected_date: None,
            selected_time: None,
            selected_service: None,
            slots,
        }
    }

    // --- Read side ---

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn grid(&self) -> MonthGrid {
        build_grid(self.cursor, self.clock.today())
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.selected_service.and_then(|i| self.catalog.get(i))
    }

    pub fn selected_service_index(&self) -> Option<usize> {
        self.selected_service
    }

    pub fn catalog(&self) -> &[Service] {
        &self.catalog
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// `"Июль 2024"`
    pub fn month_title(&self) -> String {
        format!("{} {}", self.locale.month_name(self.cursor.month0()), self.cursor.year())
    }

    /// `"Доступное время - 10 Июль"` once a date is chosen.
    pub fn slots_title(&self) -> Option<String> {
        self.selected_date.map(|d| {
            format!(
                "{} - {} {}",
                self.locale.labels().available_time,
                d.day(),
                self.locale.month_name(d.month0())
            )
        })
    }

    /// Whether the confirm affordance should be shown.
    pub fn can_confirm(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some()
    }

    // --- Transitions ---

    /// Moves the calendar by `delta` months. Drops the chosen date and time.
    pub fn advance_month(&mut self, delta: i32) -> SessionEvent {
        self.jump_to(self.cursor.shifted(delta as i64))
    }

    /// Shows `target` directly, however far away. Same effect as the
    /// equivalent run of `advance_month` calls.
    pub fn jump_to(&mut self, target: CalendarCursor) -> SessionEvent {
        let delta = self.cursor.months_until(target);
        self.cursor = target;
        self.reset_date();
        tracing::debug!(year = target.year(), month0 = target.month0(), delta, "month changed");
        SessionEvent::MonthChanged(self.cursor)
    }

    /// Chooses a day of the displayed month. Only future days are accepted;
    /// anything else leaves the session untouched.
    pub fn select_day(&mut self, day: u32) -> Option<SessionEvent> {
        let grid = self.grid();
        let selectable = grid.cell_for_day(day).is_some_and(|c| c.is_selectable());
        if !selectable {
            tracing::debug!(day, "day is not selectable");
            return None;
        }

        let date = self.cursor.date(day)?;
        self.selected_date = Some(date);
        self.selected_time = None;
        self.slots = self.resolver.resolve(self.selected_date);
        tracing::info!(%date, "date selected");
        Some(SessionEvent::DateSelected(date))
    }

    pub fn clear_selection(&mut self) -> SessionEvent {
        self.reset_date();
        SessionEvent::SelectionCleared
    }

    /// Picks a slot from the current list. Unknown or unavailable labels are
    /// ignored.
    pub fn select_time(&mut self, label: &str) -> Option<SessionEvent> {
        let available = self
            .slots
            .iter()
            .any(|s| s.label == label && s.available);
        if !available {
            tracing::debug!(label, "time slot is not available");
            return None;
        }

        self.selected_time = Some(label.to_string());
        tracing::info!(label, "time selected");
        Some(SessionEvent::TimeSelected(label.to_string()))
    }

    /// Exclusive choice from the catalog. Date and time are kept.
    pub fn choose_service(&mut self, index: usize) -> Option<SessionEvent> {
        let service = self.catalog.get(index)?.clone();
        self.selected_service = Some(index);
        tracing::info!(service = %service.name, "service chosen");
        Some(SessionEvent::ServiceChosen(service))
    }

    pub fn clear_service(&mut self) -> SessionEvent {
        self.selected_service = None;
        SessionEvent::ServiceCleared
    }

    pub fn confirm(&self) -> Result<BookingDraft, IncompleteError> {
        let draft = assemble_draft(
            self.selected_service(),
            self.selected_date,
            self.selected_time.as_deref(),
            self.locale,
        )?;
        tracing::info!(date = %draft.date, time = %draft.time, "booking draft assembled");
        Ok(draft)
    }

    fn reset_date(&mut self) {
        self.selected_date = None;
        self.selected_time = None;
        self.slots = self.resolver.resolve(None);
    }
}
