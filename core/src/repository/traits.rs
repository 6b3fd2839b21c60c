use crate::model::config::ShopConfig;
use anyhow::Result;
use chrono::NaiveDate;

/// Source of truth for which candidate slots are taken on a given day.
/// `None` means no date has been chosen yet.
pub trait AvailabilitySource {
    fn unavailable(&self, date: Option<NaiveDate>) -> Vec<String>;
}

pub trait ConfigRepository {
    fn load(&self) -> Result<ShopConfig>;
    fn save(&self, config: &ShopConfig) -> Result<()>;
}
