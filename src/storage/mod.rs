pub mod api;
pub mod memory;
pub mod traits;

pub use api::ApiStore;
pub use memory::MemoryStore;
pub use traits::StoreTrait;

use std::sync::Arc;

use tracing::info;

use crate::config::{Backend, Config};
use crate::error::{EngineError, Result};

/// Build the record store selected by the configuration.
///
/// Called once at startup; everything downstream holds the returned handle
/// and never looks at the environment again.
pub fn build(config: &Config) -> Result<Arc<dyn StoreTrait>> {
    match config.backend {
        Backend::Memory => {
            info!("using in-memory record store with sample listings");
            Ok(Arc::new(
                MemoryStore::with_sample_data().with_latency(config.mock_latency),
            ))
        }
        Backend::Api => {
            let url = config.api_url.clone().ok_or_else(|| {
                EngineError::Config("SCOUT_API_URL is required for the api backend".to_string())
            })?;
            info!("using remote record store at {}", url);
            Ok(Arc::new(ApiStore::new(url)?))
        }
    }
}
