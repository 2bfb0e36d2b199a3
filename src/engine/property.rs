use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::models::{Property, PropertyDraft, PropertyPatch};
use crate::storage::StoreTrait;

/// CRUD surface over the property collection.
///
/// Listings are created and edited by the management surface, not by
/// browsing users; this service is the one place those mutations go
/// through.
pub struct PropertyService {
    store: Arc<dyn StoreTrait>,
}

impl PropertyService {
    pub fn new(store: Arc<dyn StoreTrait>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Property>> {
        self.store.fetch_properties().await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Property> {
        self.store.fetch_property_by_id(id).await
    }

    pub async fn create(&self, draft: PropertyDraft) -> Result<Property> {
        let property = self.store.create_property(draft).await?;
        info!("listed property {} '{}'", property.id, property.title);
        Ok(property)
    }

    pub async fn update(&self, id: u32, patch: PropertyPatch) -> Result<Property> {
        self.store.update_property(id, patch).await
    }

    pub async fn delete(&self, id: u32) -> Result<Property> {
        let property = self.store.delete_property(id).await?;
        info!("delisted property {}", id);
        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Coordinates, PropertyType};
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn draft(title: &str) -> PropertyDraft {
        PropertyDraft {
            title: title.to_string(),
            description: String::new(),
            price: 200_000,
            address: Address {
                street: "1 Test St".to_string(),
                city: "Testville".to_string(),
                state: "OR".to_string(),
                zip_code: "97000".to_string(),
            },
            bedrooms: 2,
            bathrooms: 1.0,
            square_feet: 900,
            property_type: PropertyType::House,
            images: vec![],
            amenities: vec![],
            listing_date: Utc::now(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        }
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let service = PropertyService::new(Arc::new(MemoryStore::new()));

        let created = service.create(draft("First")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(service.get_by_id(1).await.unwrap(), created);

        let patch = PropertyPatch {
            price: Some(210_000),
            ..Default::default()
        };
        let updated = service.update(1, patch).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.price, 210_000);

        let deleted = service.delete(1).await.unwrap();
        assert_eq!(deleted.id, 1);
        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_property_propagates_not_found() {
        let service = PropertyService::new(Arc::new(MemoryStore::new()));
        let err = service.get_by_id(42).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
