pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{CursorError, IncompleteError};
pub use input::{match_service, normalize_time};
pub use model::booking::{BookingDraft, DraftSummary, SummaryLine};
pub use model::calendar::{CalendarCursor, CellOrigin, DayCell, Temporal};
pub use model::config::{Contacts, ShopConfig};
pub use model::locale::{Labels, Locale};
pub use model::service::Service;
pub use model::slot::TimeSlot;
pub use repository::{AvailabilitySource, ConfigRepository, FileConfigRepository, PlaceholderAvailability};
pub use service::availability::{resolve_slots, AvailabilityResolver, CANDIDATE_SLOTS};
pub use service::calendar::{build_grid, MonthGrid, DAYS_PER_WEEK, GRID_CELLS};
pub use service::draft::{assemble_draft, format_booking_date};
pub use service::session::{BookingSession, SessionEvent};
pub use time::{parse_date, parse_month, Clock, FixedClock, SystemClock};
