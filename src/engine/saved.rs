use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::Result;
use crate::models::SavedRecord;
use crate::storage::StoreTrait;

/// What a toggle did, carrying the record it created or removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "record", rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added(SavedRecord),
    Removed(SavedRecord),
}

impl ToggleOutcome {
    pub fn record(&self) -> &SavedRecord {
        match self {
            ToggleOutcome::Added(record) | ToggleOutcome::Removed(record) => record,
        }
    }

    pub fn was_added(&self) -> bool {
        matches!(self, ToggleOutcome::Added(_))
    }
}

/// Owns the saved-property set.
///
/// Membership changes only through `toggle_save`; the internal lock makes
/// the exists-check and the mutation one step, so no two records for the
/// same property can ever coexist.
pub struct SavedService {
    store: Arc<dyn StoreTrait>,
    toggle_lock: Mutex<()>,
}

impl SavedService {
    pub fn new(store: Arc<dyn StoreTrait>) -> Self {
        Self {
            store,
            toggle_lock: Mutex::new(()),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<SavedRecord>> {
        self.store.fetch_saved_records().await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<SavedRecord> {
        let records = self.store.fetch_saved_records().await?;
        records
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(crate::error::EngineError::SavedRecordNotFound { id })
    }

    pub async fn is_property_saved(&self, property_id: u32) -> Result<bool> {
        let records = self.store.fetch_saved_records().await?;
        Ok(records.iter().any(|record| record.property_id == property_id))
    }

    /// Flip the saved state of a property.
    ///
    /// Removing a record discards its notes for good; saving again later
    /// starts over with a fresh record.
    pub async fn toggle_save(&self, property_id: u32) -> Result<ToggleOutcome> {
        let _guard = self.toggle_lock.lock().await;

        let records = self.store.fetch_saved_records().await?;
        let existing = records
            .into_iter()
            .find(|record| record.property_id == property_id);

        match existing {
            Some(record) => {
                self.store.delete_saved_record(record.id).await?;
                info!("unsaved property {}", property_id);
                Ok(ToggleOutcome::Removed(record))
            }
            None => {
                let record = self.store.create_saved_record(property_id).await?;
                info!("saved property {}", property_id);
                Ok(ToggleOutcome::Added(record))
            }
        }
    }

    /// Edit the notes on a saved record; everything else is immutable
    pub async fn update_notes(&self, id: u32, notes: &str) -> Result<SavedRecord> {
        self.store.update_saved_record(id, notes).await
    }
}
