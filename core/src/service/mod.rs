pub mod availability;
pub mod calendar;
pub mod draft;
pub mod session;
