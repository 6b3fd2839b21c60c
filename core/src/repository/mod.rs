pub mod availability;
pub mod file;
pub mod traits;

// Re-export
pub use availability::PlaceholderAvailability;
pub use file::{data_dir, FileConfigRepository};
pub use traits::{AvailabilitySource, ConfigRepository};
