pub mod filter;
pub mod property;
pub mod query;
pub mod saved;
pub mod search;

pub use filter::FilterCriteria;
pub use property::PropertyService;
pub use query::QueryService;
pub use saved::{SavedService, ToggleOutcome};
