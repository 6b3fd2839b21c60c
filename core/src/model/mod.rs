pub mod booking;
pub mod calendar;
pub mod config;
pub mod locale;
pub mod service;
pub mod slot;
