use thiserror::Error;

/// Why a booking draft could not be assembled. Recoverable: the caller
/// should ask the visitor to finish the selection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteError {
    #[error("booking date is missing")]
    MissingDate,

    #[error("booking time is missing")]
    MissingTime,

    #[error("booking date and time are missing")]
    MissingDateAndTime,
}

impl IncompleteError {
    pub fn is_missing_date(&self) -> bool {
        matches!(self, Self::MissingDate | Self::MissingDateAndTime)
    }

    pub fn is_missing_time(&self) -> bool {
        matches!(self, Self::MissingTime | Self::MissingDateAndTime)
    }
}

/// A stored cursor whose month is not a real month.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("month0 {0} is out of range 0..=11")]
    MonthOutOfRange(u32),
}
