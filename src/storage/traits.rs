use crate::error::Result;
use crate::models::{Property, PropertyDraft, PropertyPatch, SavedRecord};
use async_trait::async_trait;

/// Common trait for all record stores
/// This allows swapping the seeded in-memory store for the remote record API
/// (or any future backend) without touching the engine
#[async_trait]
pub trait StoreTrait: Send + Sync {
    /// All properties, in insertion order
    async fn fetch_properties(&self) -> Result<Vec<Property>>;

    /// One property by id
    async fn fetch_property_by_id(&self, id: u32) -> Result<Property>;

    /// Store a new property; the store assigns `max(existing ids) + 1`
    async fn create_property(&self, draft: PropertyDraft) -> Result<Property>;

    /// Merge a patch into an existing property; the id never changes
    async fn update_property(&self, id: u32, patch: PropertyPatch) -> Result<Property>;

    /// Remove a property and return it
    async fn delete_property(&self, id: u32) -> Result<Property>;

    /// All saved records, in insertion order
    async fn fetch_saved_records(&self) -> Result<Vec<SavedRecord>>;

    /// Store a fresh record for `property_id` with empty notes and the
    /// current time; the store assigns the id
    async fn create_saved_record(&self, property_id: u32) -> Result<SavedRecord>;

    /// Remove a saved record
    async fn delete_saved_record(&self, id: u32) -> Result<()>;

    /// Replace the notes on a saved record; nothing else is editable
    async fn update_saved_record(&self, id: u32, notes: &str) -> Result<SavedRecord>;
}
