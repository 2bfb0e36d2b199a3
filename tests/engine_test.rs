#[cfg(test)]
mod tests {
    use chrono::Utc;
    use listing_scout::engine::{FilterCriteria, PropertyService, QueryService, SavedService};
    use listing_scout::models::{Address, Coordinates, Property, PropertyType};
    use listing_scout::storage::{MemoryStore, StoreTrait};
    use std::sync::Arc;

    fn listing(
        id: u32,
        title: &str,
        price: i64,
        property_type: PropertyType,
        amenities: &[&str],
    ) -> Property {
        Property {
            id,
            title: title.to_string(),
            description: String::new(),
            price,
            address: Address {
                street: format!("{id} Main St"),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97214".to_string(),
            },
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1_500,
            property_type,
            images: vec![],
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            listing_date: Utc::now(),
            coordinates: Coordinates { lat: 45.5, lng: -122.6 },
        }
    }

    fn seeded_store() -> Arc<dyn StoreTrait> {
        Arc::new(MemoryStore::with_properties(vec![
            listing(1, "Riverside Condo", 150_000, PropertyType::Condo, &["Pool"]),
            listing(2, "Oak Street House", 350_000, PropertyType::House, &["Pool", "Gym"]),
            listing(3, "Hillcrest House", 500_000, PropertyType::House, &["Gym"]),
        ]))
    }

    #[tokio::test]
    async fn filters_compose_over_the_full_set() {
        let listings = QueryService::new(seeded_store());

        let criteria = FilterCriteria {
            price_min: Some(200_000),
            property_types: vec![PropertyType::House],
            amenities: vec!["Gym".to_string()],
            ..Default::default()
        };

        let results = listings.query("", &criteria).await.unwrap();
        let ids: Vec<_> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[tokio::test]
    async fn text_search_narrows_before_filters() {
        let listings = QueryService::new(seeded_store());

        let criteria = FilterCriteria {
            price_max: Some(400_000),
            ..Default::default()
        };

        let results = listings.query("oak", &criteria).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 2);

        // searching by city still reaches every listing
        let by_city = listings.query("PORTLAND", &FilterCriteria::default()).await.unwrap();
        assert_eq!(by_city.len(), 3);
    }

    #[tokio::test]
    async fn query_never_mutates_the_stored_set() {
        let store = seeded_store();
        let listings = QueryService::new(store.clone());

        let criteria = FilterCriteria {
            property_types: vec![PropertyType::Condo],
            ..Default::default()
        };
        listings.query("house", &criteria).await.unwrap();

        let all = store.fetch_properties().await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[tokio::test]
    async fn saved_set_follows_toggles_across_services() {
        let store = seeded_store();
        let listings = QueryService::new(store.clone());
        let saved = SavedService::new(store.clone());

        let results = listings.query("", &FilterCriteria::default()).await.unwrap();
        let first = &results[0];

        let outcome = saved.toggle_save(first.id).await.unwrap();
        assert!(outcome.was_added());
        assert!(saved.is_property_saved(first.id).await.unwrap());

        saved
            .update_notes(outcome.record().id, "schedule a viewing")
            .await
            .unwrap();
        let records = saved.get_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].notes, "schedule a viewing");
        assert_eq!(records[0].property_id, first.id);

        let outcome = saved.toggle_save(first.id).await.unwrap();
        assert!(!outcome.was_added());
        assert!(saved.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_a_property_leaves_other_listings_intact() {
        let store = seeded_store();
        let properties = PropertyService::new(store.clone());
        let listings = QueryService::new(store);

        properties.delete(2).await.unwrap();

        let remaining = listings.query("", &FilterCriteria::default()).await.unwrap();
        let ids: Vec<_> = remaining.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);

        let err = properties.get_by_id(2).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn sample_data_flows_through_the_whole_pipeline() {
        let store: Arc<dyn StoreTrait> = Arc::new(MemoryStore::with_sample_data());
        let listings = QueryService::new(store);

        let criteria = FilterCriteria {
            amenities: vec!["Pool".to_string(), "Gym".to_string()],
            ..Default::default()
        };
        let results = listings.query("", &criteria).await.unwrap();
        assert!(!results.is_empty());
        for property in &results {
            assert!(property.amenities.iter().any(|a| a == "Pool"));
            assert!(property.amenities.iter().any(|a| a == "Gym"));
        }
    }
}
