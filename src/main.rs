use listing_scout::config::Config;
use listing_scout::engine::{FilterCriteria, QueryService, SavedService};
use listing_scout::models::PropertyType;
use listing_scout::storage;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Listing Scout - property query engine");
    info!("=========================================");
    info!("");

    let config = Config::from_env()?;
    let store = storage::build(&config)?;

    let listings = QueryService::new(store.clone());
    let saved = SavedService::new(store.clone());

    // Houses and townhouses with at least 2 bedrooms under $700k
    let criteria = FilterCriteria {
        price_max: Some(700_000),
        property_types: vec![PropertyType::House, PropertyType::Townhouse],
        bedrooms_min: Some(2),
        ..Default::default()
    };

    info!("Searching listings matching 'portland' with filters applied...");
    info!("");

    let results = listings.query("portland", &criteria).await?;

    info!("✅ Found {} matching listings\n", results.len());

    for (i, property) in results.iter().enumerate() {
        println!("{}. {} (${})", i + 1, property.title, property.price);
        println!(
            "   {} bd, {} ba, {} sqft - {}",
            property.bedrooms,
            property.bathrooms,
            property.square_feet,
            property.property_type.as_str()
        );
        println!(
            "   {}, {}, {} {}",
            property.address.street,
            property.address.city,
            property.address.state,
            property.address.zip_code
        );
        if !property.amenities.is_empty() {
            println!("   Amenities: {}", property.amenities.join(", "));
        }
        println!();
    }

    // Bookmark the first hit, then show the saved set
    if let Some(first) = results.first() {
        let outcome = saved.toggle_save(first.id).await?;
        info!(
            "💾 Toggled save on property {}: {}",
            first.id,
            if outcome.was_added() { "added" } else { "removed" }
        );
    }

    let records = saved.get_all().await?;
    info!("Saved set now holds {} record(s)", records.len());

    Ok(())
}
