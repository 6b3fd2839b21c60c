use chrono::NaiveDate;
use std::fmt;

use crate::model::service::Service;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Human-readable form of a draft, ready for a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSummary {
    pub service: SummaryLine,
    pub date: SummaryLine,
    pub time: SummaryLine,
}

impl DraftSummary {
    pub fn lines(&self) -> [&SummaryLine; 3] {
        [&self.service, &self.date, &self.time]
    }
}

/// A complete, not yet submitted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub service: Option<Service>,
    pub date: NaiveDate,
    pub time: String,
    pub summary: DraftSummary,
}

impl fmt::Display for BookingDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.summary.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
