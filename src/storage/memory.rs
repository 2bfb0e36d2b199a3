use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::{
    Address, Coordinates, Property, PropertyDraft, PropertyPatch, PropertyType, SavedRecord,
};
use crate::storage::traits::StoreTrait;

/// In-memory record store backed by seed data.
///
/// Collections keep insertion order. An optional latency is applied to every
/// operation to mimic a remote backend during development.
pub struct MemoryStore {
    properties: RwLock<Vec<Property>>,
    saved: RwLock<Vec<SavedRecord>>,
    latency: Duration,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            properties: RwLock::new(Vec::new()),
            saved: RwLock::new(Vec::new()),
            latency: Duration::ZERO,
        }
    }

    /// Create a store preloaded with the given properties
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties: RwLock::new(properties),
            saved: RwLock::new(Vec::new()),
            latency: Duration::ZERO,
        }
    }

    /// Create a store preloaded with the bundled sample listings
    pub fn with_sample_data() -> Self {
        Self::with_properties(sample_listings())
    }

    /// Apply a simulated per-operation delay
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}

#[async_trait]
impl StoreTrait for MemoryStore {
    async fn fetch_properties(&self) -> Result<Vec<Property>> {
        self.pause().await;
        Ok(self.properties.read().unwrap().clone())
    }

    async fn fetch_property_by_id(&self, id: u32) -> Result<Property> {
        self.pause().await;
        self.properties
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(EngineError::PropertyNotFound { id })
    }

    async fn create_property(&self, draft: PropertyDraft) -> Result<Property> {
        self.pause().await;
        let mut properties = self.properties.write().unwrap();
        let id = next_id(properties.iter().map(|p| p.id));
        let property = draft.into_property(id);
        properties.push(property.clone());
        debug!("created property {}", id);
        Ok(property)
    }

    async fn update_property(&self, id: u32, patch: PropertyPatch) -> Result<Property> {
        self.pause().await;
        let mut properties = self.properties.write().unwrap();
        let property = properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EngineError::PropertyNotFound { id })?;
        patch.apply_to(property);
        Ok(property.clone())
    }

    async fn delete_property(&self, id: u32) -> Result<Property> {
        self.pause().await;
        let mut properties = self.properties.write().unwrap();
        let index = properties
            .iter()
            .position(|p| p.id == id)
            .ok_or(EngineError::PropertyNotFound { id })?;
        Ok(properties.remove(index))
    }

    async fn fetch_saved_records(&self) -> Result<Vec<SavedRecord>> {
        self.pause().await;
        Ok(self.saved.read().unwrap().clone())
    }

    async fn create_saved_record(&self, property_id: u32) -> Result<SavedRecord> {
        self.pause().await;
        let mut saved = self.saved.write().unwrap();
        let record = SavedRecord {
            id: next_id(saved.iter().map(|r| r.id)),
            property_id,
            saved_date: Utc::now(),
            notes: String::new(),
        };
        saved.push(record.clone());
        debug!("saved property {} as record {}", property_id, record.id);
        Ok(record)
    }

    async fn delete_saved_record(&self, id: u32) -> Result<()> {
        self.pause().await;
        let mut saved = self.saved.write().unwrap();
        let index = saved
            .iter()
            .position(|r| r.id == id)
            .ok_or(EngineError::SavedRecordNotFound { id })?;
        saved.remove(index);
        Ok(())
    }

    async fn update_saved_record(&self, id: u32, notes: &str) -> Result<SavedRecord> {
        self.pause().await;
        let mut saved = self.saved.write().unwrap();
        let record = saved
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(EngineError::SavedRecordNotFound { id })?;
        record.notes = notes.to_string();
        Ok(record.clone())
    }
}

/// Sample listings used by the memory backend
pub fn sample_listings() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Charming Craftsman Near Downtown".to_string(),
            description: "Restored 1920s craftsman with original hardwood floors, \
                          a wraparound porch and a fenced back garden."
                .to_string(),
            price: 425_000,
            address: Address {
                street: "418 Maple Ave".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97214".to_string(),
            },
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1_780,
            property_type: PropertyType::House,
            images: vec![
                "https://images.example.com/listings/1/front.jpg".to_string(),
                "https://images.example.com/listings/1/kitchen.jpg".to_string(),
            ],
            amenities: vec![
                "Garden".to_string(),
                "Fireplace".to_string(),
                "Washer/Dryer".to_string(),
            ],
            listing_date: Utc::now() - chrono::Duration::days(12),
            coordinates: Coordinates {
                lat: 45.5122,
                lng: -122.6587,
            },
        },
        Property {
            id: 2,
            title: "Modern Condo With River View".to_string(),
            description: "Ninth-floor corner unit, floor-to-ceiling windows and a \
                          building gym two blocks from the waterfront."
                .to_string(),
            price: 519_000,
            address: Address {
                street: "77 Riverfront Blvd, Unit 9C".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97209".to_string(),
            },
            bedrooms: 2,
            bathrooms: 2.0,
            square_feet: 1_150,
            property_type: PropertyType::Condo,
            images: vec!["https://images.example.com/listings/2/living.jpg".to_string()],
            amenities: vec![
                "Gym".to_string(),
                "Parking".to_string(),
                "Air Conditioning".to_string(),
                "Balcony".to_string(),
            ],
            listing_date: Utc::now() - chrono::Duration::days(5),
            coordinates: Coordinates {
                lat: 45.5316,
                lng: -122.6822,
            },
        },
        Property {
            id: 3,
            title: "Sunny Main Street Townhouse".to_string(),
            description: "Three-story townhouse on Main Street with a rooftop deck \
                          and an attached two-car garage."
                .to_string(),
            price: 610_000,
            address: Address {
                street: "1520 Main St".to_string(),
                city: "Beaverton".to_string(),
                state: "OR".to_string(),
                zip_code: "97005".to_string(),
            },
            bedrooms: 3,
            bathrooms: 2.5,
            square_feet: 1_960,
            property_type: PropertyType::Townhouse,
            images: vec![
                "https://images.example.com/listings/3/street.jpg".to_string(),
                "https://images.example.com/listings/3/deck.jpg".to_string(),
            ],
            amenities: vec![
                "Parking".to_string(),
                "Balcony".to_string(),
                "Dishwasher".to_string(),
            ],
            listing_date: Utc::now() - chrono::Duration::days(21),
            coordinates: Coordinates {
                lat: 45.4871,
                lng: -122.8037,
            },
        },
        Property {
            id: 4,
            title: "Garden-Level Apartment, Pet Friendly".to_string(),
            description: "Quiet one-bedroom with a private patio, shared pool and \
                          on-site laundry. Cats and small dogs welcome."
                .to_string(),
            price: 235_000,
            address: Address {
                street: "902 Cedar Ct".to_string(),
                city: "Gresham".to_string(),
                state: "OR".to_string(),
                zip_code: "97030".to_string(),
            },
            bedrooms: 1,
            bathrooms: 1.0,
            square_feet: 680,
            property_type: PropertyType::Apartment,
            images: vec!["https://images.example.com/listings/4/patio.jpg".to_string()],
            amenities: vec![
                "Pool".to_string(),
                "Pet Friendly".to_string(),
                "Washer/Dryer".to_string(),
            ],
            listing_date: Utc::now() - chrono::Duration::days(3),
            coordinates: Coordinates {
                lat: 45.5001,
                lng: -122.4302,
            },
        },
        Property {
            id: 5,
            title: "Hilltop House With Pool and Gym".to_string(),
            description: "Five-bedroom house on a half-acre lot: heated pool, home \
                          gym and a three-car garage at the end of a cul-de-sac."
                .to_string(),
            price: 1_150_000,
            address: Address {
                street: "6 Summit Ridge Dr".to_string(),
                city: "Lake Oswego".to_string(),
                state: "OR".to_string(),
                zip_code: "97034".to_string(),
            },
            bedrooms: 5,
            bathrooms: 3.5,
            square_feet: 4_200,
            property_type: PropertyType::House,
            images: vec![
                "https://images.example.com/listings/5/aerial.jpg".to_string(),
                "https://images.example.com/listings/5/pool.jpg".to_string(),
                "https://images.example.com/listings/5/gym.jpg".to_string(),
            ],
            amenities: vec![
                "Pool".to_string(),
                "Gym".to_string(),
                "Parking".to_string(),
                "Air Conditioning".to_string(),
                "Fireplace".to_string(),
            ],
            listing_date: Utc::now() - chrono::Duration::days(45),
            coordinates: Coordinates {
                lat: 45.4207,
                lng: -122.6706,
            },
        },
        Property {
            id: 6,
            title: "Compact Studio Condo Downtown".to_string(),
            description: "Efficient studio in the Pearl District, walk score 98, \
                          secure bike storage in the basement."
                .to_string(),
            price: 189_000,
            address: Address {
                street: "211 NW Flanders St, Unit 404".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97209".to_string(),
            },
            bedrooms: 0,
            bathrooms: 1.0,
            square_feet: 420,
            property_type: PropertyType::Condo,
            images: vec![],
            amenities: vec!["Air Conditioning".to_string()],
            listing_date: Utc::now() - chrono::Duration::days(8),
            coordinates: Coordinates {
                lat: 45.5251,
                lng: -122.6760,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PropertyDraft {
        PropertyDraft {
            title: title.to_string(),
            description: String::new(),
            price: 300_000,
            address: Address {
                street: "1 Test St".to_string(),
                city: "Testville".to_string(),
                state: "OR".to_string(),
                zip_code: "97000".to_string(),
            },
            bedrooms: 2,
            bathrooms: 1.0,
            square_feet: 800,
            property_type: PropertyType::House,
            images: vec![],
            amenities: vec![],
            listing_date: Utc::now(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        }
    }

    #[tokio::test]
    async fn create_assigns_one_on_empty_store() {
        let store = MemoryStore::new();
        let created = store.create_property(draft("First")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one() {
        let store = MemoryStore::with_sample_data();
        let created = store.create_property(draft("Next")).await.unwrap();
        assert_eq!(created.id, 7);

        // ids are never reused, even after deleting the newest entry
        store.delete_property(7).await.unwrap();
        store.delete_property(6).await.unwrap();
        let again = store.create_property(draft("After delete")).await.unwrap();
        assert_eq!(again.id, 6);
    }

    #[tokio::test]
    async fn fetch_preserves_insertion_order() {
        let store = MemoryStore::new();
        for title in ["a", "b", "c"] {
            store.create_property(draft(title)).await.unwrap();
        }
        let all = store.fetch_properties().await.unwrap();
        let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_merges_and_keeps_id() {
        let store = MemoryStore::new();
        let created = store.create_property(draft("Original")).await.unwrap();

        let patch = PropertyPatch {
            title: Some("Renamed".to_string()),
            price: Some(111_000),
            ..Default::default()
        };
        let updated = store.update_property(created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.price, 111_000);
        assert_eq!(updated.bedrooms, created.bedrooms);
    }

    #[tokio::test]
    async fn missing_ids_fail_with_not_found() {
        let store = MemoryStore::new();
        assert!(store
            .fetch_property_by_id(99)
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store
            .update_property(99, PropertyPatch::default())
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.delete_property(99).await.unwrap_err().is_not_found());
        assert!(store
            .delete_saved_record(99)
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store
            .update_saved_record(99, "x")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn delete_returns_the_removed_property() {
        let store = MemoryStore::new();
        let created = store.create_property(draft("Doomed")).await.unwrap();
        let deleted = store.delete_property(created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(store.fetch_properties().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saved_records_get_fresh_ids_and_empty_notes() {
        let store = MemoryStore::new();
        let first = store.create_saved_record(10).await.unwrap();
        let second = store.create_saved_record(20).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.notes, "");

        let updated = store.update_saved_record(first.id, "open house sat").await.unwrap();
        assert_eq!(updated.notes, "open house sat");
        assert_eq!(updated.property_id, 10);
        assert_eq!(updated.saved_date, first.saved_date);
    }

    #[tokio::test]
    async fn sample_listings_have_unique_ids() {
        let listings = sample_listings();
        let mut ids: Vec<_> = listings.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());
    }
}
