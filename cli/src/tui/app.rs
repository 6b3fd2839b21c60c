use barberbook_core::{
    BookingDraft, BookingSession, Clock, Contacts, SessionEvent, ShopConfig, DAYS_PER_WEEK,
    GRID_CELLS,
};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Calendar,
    Slots,
    Services,
}

pub struct App {
    pub session: BookingSession<Box<dyn Clock>>,
    pub shop_name: String,
    pub contacts: Contacts,
    pub focus: Focus,
    /// Highlighted grid cell, 0..42.
    pub day_cursor: usize,
    pub slot_state: ListState,
    pub service_state: ListState,
    /// Open confirmation dialog.
    pub draft: Option<BookingDraft>,
    pub notice: Option<String>,
}

impl App {
    pub fn new(clock: Box<dyn Clock>, config: ShopConfig) -> App {
        let session = BookingSession::new(clock, &config);

        let mut slot_state = ListState::default();
        slot_state.select(Some(0));
        let mut service_state = ListState::default();
        if !session.catalog().is_empty() {
            service_state.select(Some(0));
        }

        let mut app = App {
            session,
            shop_name: config.shop_name,
            contacts: config.contacts,
            focus: Focus::Calendar,
            day_cursor: 0,
            slot_state,
            service_state,
            draft: None,
            notice: None,
        };
        app.reset_day_cursor();
        app
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Calendar => Focus::Slots,
            Focus::Slots => Focus::Services,
            Focus::Services => Focus::Calendar,
        };
    }

    pub fn move_left(&mut self) {
        if self.focus == Focus::Calendar {
            self.day_cursor = self.day_cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if self.focus == Focus::Calendar && self.day_cursor + 1 < GRID_CELLS {
            self.day_cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Calendar => self.day_cursor = self.day_cursor.saturating_sub(DAYS_PER_WEEK),
            Focus::Slots => {
                let len = self.session.slots().len();
                step(&mut self.slot_state, len, false);
            }
            Focus::Services => {
                let len = self.session.catalog().len();
                step(&mut self.service_state, len, false);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Calendar => {
                if self.day_cursor + DAYS_PER_WEEK < GRID_CELLS {
                    self.day_cursor += DAYS_PER_WEEK;
                }
            }
            Focus::Slots => {
                let len = self.session.slots().len();
                step(&mut self.slot_state, len, true);
            }
            Focus::Services => {
                let len = self.session.catalog().len();
                step(&mut self.service_state, len, true);
            }
        }
    }

    /// Enter / space on the focused pane.
    pub fn activate(&mut self) {
        self.notice = None;
        let event = match self.focus {
            Focus::Calendar => {
                let cell = self.session.grid().cells()[self.day_cursor];
                if cell.is_current() {
                    self.session.select_day(cell.day)
                } else {
                    None
                }
            }
            Focus::Slots => {
                let label = self
                    .slot_state
                    .selected()
                    .and_then(|i| self.session.slots().get(i))
                    .map(|s| s.label.clone());
                label.and_then(|l| self.session.select_time(&l))
            }
            Focus::Services => match self.service_state.selected() {
                Some(i) if self.session.selected_service_index() == Some(i) => {
                    Some(self.session.clear_service())
                }
                Some(i) => self.session.choose_service(i),
                None => None,
            },
        };
        if let Some(event) = event {
            self.on_event(event);
        }
    }

    pub fn change_month(&mut self, delta: i32) {
        self.notice = None;
        let event = self.session.advance_month(delta);
        self.on_event(event);
    }

    pub fn clear_selection(&mut self) {
        let event = self.session.clear_selection();
        self.on_event(event);
    }

    pub fn confirm(&mut self) {
        match self.session.confirm() {
            Ok(draft) => {
                self.notice = None;
                self.draft = Some(draft);
            }
            Err(e) => {
                // Point the visitor at the first pane that still needs a pick
                let labels = self.session.locale().labels();
                let mut missing = Vec::new();
                if e.is_missing_date() {
                    missing.push(labels.date);
                    self.focus = Focus::Calendar;
                } else if e.is_missing_time() {
                    self.focus = Focus::Slots;
                }
                if e.is_missing_time() {
                    missing.push(labels.time);
                }
                self.notice = Some(format!("{} ({})", labels.choose_date_and_time, missing.join(", ")));
            }
        }
    }

    pub fn close_dialog(&mut self) {
        self.draft = None;
    }

    fn on_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::MonthChanged(_) => {
                self.reset_day_cursor();
                self.slot_state.select(Some(0));
            }
            SessionEvent::DateSelected(_) => {
                let first_free = self.session.slots().iter().position(|s| s.available);
                self.slot_state.select(first_free.or(Some(0)));
                self.focus = Focus::Slots;
            }
            SessionEvent::SelectionCleared => {
                self.slot_state.select(Some(0));
            }
            SessionEvent::TimeSelected(_)
            | SessionEvent::ServiceChosen(_)
            | SessionEvent::ServiceCleared => {}
        }
    }

    /// Today if shown, else the first bookable day, else the 1st.
    fn reset_day_cursor(&mut self) {
        let grid = self.session.grid();
        let cells = grid.cells();
        let today = grid.today().map(|t| t.day);
        self.day_cursor = cells
            .iter()
            .position(|c| c.is_current() && Some(c.day) == today)
            .or_else(|| cells.iter().position(|c| c.is_selectable()))
            .or_else(|| cells.iter().position(|c| c.is_current()))
            .unwrap_or(0);
    }
}

/// Moves a list selection one step, wrapping at both ends.
fn step(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => {
            if i >= len - 1 {
                0
            } else {
                i + 1
            }
        }
        Some(i) => {
            if i == 0 {
                len - 1
            } else {
                i - 1
            }
        }
        None => 0,
    };
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;
    use barberbook_core::FixedClock;
    use chrono::NaiveDate;

    fn app() -> App {
        let clock: Box<dyn Clock> = Box::new(FixedClock(NaiveDate::from_ymd_opt(2024, 7, 9).unwrap()));
        App::new(clock, ShopConfig::default())
    }

    #[test]
    fn test_cursor_starts_on_today() {
        let app = app();
        // July 2024 starts on Monday, so the 9th sits at index 8
        assert_eq!(app.day_cursor, 8);
    }

    #[test]
    fn test_enter_on_today_is_ignored() {
        let mut app = app();
        app.activate();
        assert_eq!(app.session.selected_date(), None);
        assert_eq!(app.focus, Focus::Calendar);
    }

    #[test]
    fn test_full_booking_flow() {
        let mut app = app();
        app.move_right();
        app.activate();
        assert_eq!(app.session.selected_date(), NaiveDate::from_ymd_opt(2024, 7, 10));
        assert_eq!(app.focus, Focus::Slots);
        assert_eq!(app.slot_state.selected(), Some(0));

        app.activate();
        assert_eq!(app.session.selected_time(), Some("10:00"));

        app.confirm();
        let draft = app.draft.as_ref().unwrap();
        assert_eq!(draft.time, "10:00");
        assert_eq!(draft.summary.service.value, "Не выбрана");

        app.close_dialog();
        assert!(app.draft.is_none());
    }

    #[test]
    fn test_confirm_without_selection_sets_notice() {
        let mut app = app();
        app.confirm();
        assert!(app.draft.is_none());
        assert!(app.notice.as_deref().unwrap().starts_with("Пожалуйста"));
    }

    #[test]
    fn test_confirm_notice_names_missing_parts() {
        let mut app = app();
        app.focus = Focus::Services;
        app.confirm();
        assert_eq!(
            app.notice.as_deref(),
            Some("Пожалуйста, выберите дату и время (Дата, Время)")
        );
        assert_eq!(app.focus, Focus::Calendar);

        app.move_right();
        app.activate();
        app.focus = Focus::Services;
        app.confirm();
        assert_eq!(app.notice.as_deref(), Some("Пожалуйста, выберите дату и время (Время)"));
        assert_eq!(app.focus, Focus::Slots);
        assert!(app.draft.is_none());
    }

    #[test]
    fn test_cursor_returns_to_today() {
        let mut app = app();
        app.change_month(1);
        app.change_month(-1);
        assert_eq!(app.day_cursor, 8);
        assert_eq!(app.session.grid().today().map(|c| c.day), Some(9));
    }

    #[test]
    fn test_month_change_resets_cursor() {
        let mut app = app();
        app.change_month(1);
        // August 2024 starts on Thursday: first bookable day at index 3
        assert_eq!(app.day_cursor, 3);
        assert_eq!(app.session.month_title(), "Август 2024");
    }

    #[test]
    fn test_service_toggle() {
        let mut app = app();
        app.focus = Focus::Services;
        app.move_down();
        app.activate();
        assert_eq!(app.session.selected_service_index(), Some(1));
        app.activate();
        assert_eq!(app.session.selected_service_index(), None);
    }

    #[test]
    fn test_step_wraps() {
        let mut state = ListState::default();
        state.select(Some(0));
        step(&mut state, 3, false);
        assert_eq!(state.selected(), Some(2));
        step(&mut state, 3, true);
        assert_eq!(state.selected(), Some(0));
    }
}
