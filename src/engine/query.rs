use std::sync::Arc;

use tracing::debug;

use crate::engine::filter::{self, FilterCriteria};
use crate::engine::search;
use crate::error::Result;
use crate::models::Property;
use crate::storage::StoreTrait;

/// Run the two-stage query pipeline over an already-fetched set.
///
/// Text search narrows first (cheap substring pass), then the criteria
/// apply to what is left. Input order survives both stages, so results are
/// deterministic for a given input sequence.
pub fn run(free_text: &str, criteria: &FilterCriteria, properties: Vec<Property>) -> Vec<Property> {
    let narrowed = search::narrow(free_text, properties);
    filter::apply(criteria, narrowed)
}

/// Entry point for listing queries; the only component the presentation
/// layer calls for combined search + filter.
pub struct QueryService {
    store: Arc<dyn StoreTrait>,
}

impl QueryService {
    pub fn new(store: Arc<dyn StoreTrait>) -> Self {
        Self { store }
    }

    /// Fetch the full listing set and run `free_text` + `criteria` over it
    pub async fn query(
        &self,
        free_text: &str,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Property>> {
        let all = self.store.fetch_properties().await?;
        let total = all.len();
        let results = run(free_text, criteria, all);
        debug!("query matched {} of {} listings", results.len(), total);
        Ok(results)
    }
}
