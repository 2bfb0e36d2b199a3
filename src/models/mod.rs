use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Category of a property listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Condo,
    Townhouse,
    Apartment,
}

impl PropertyType {
    /// Every type a listing can carry, in display order
    pub const ALL: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Apartment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Apartment => "Apartment",
        }
    }
}

/// Street address of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Map position of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Core property data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub address: Address,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub square_feet: i32,
    pub property_type: PropertyType,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub listing_date: DateTime<Utc>,
    pub coordinates: Coordinates,
}

/// A property as submitted for creation, before the store assigns an id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub address: Address,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub square_feet: i32,
    pub property_type: PropertyType,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub listing_date: DateTime<Utc>,
    pub coordinates: Coordinates,
}

impl PropertyDraft {
    pub fn into_property(self, id: u32) -> Property {
        Property {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            address: self.address,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            property_type: self.property_type,
            images: self.images,
            amenities: self.amenities,
            listing_date: self.listing_date,
            coordinates: self.coordinates,
        }
    }
}

/// Partial update for a property. There is deliberately no `id` field:
/// an update can never reassign the primary key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub address: Option<Address>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub square_feet: Option<i32>,
    pub property_type: Option<PropertyType>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub listing_date: Option<DateTime<Utc>>,
    pub coordinates: Option<Coordinates>,
}

impl PropertyPatch {
    /// Merge the set fields into `property`, leaving its id untouched
    pub fn apply_to(&self, property: &mut Property) {
        if let Some(title) = &self.title {
            property.title = title.clone();
        }
        if let Some(description) = &self.description {
            property.description = description.clone();
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(address) = &self.address {
            property.address = address.clone();
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(square_feet) = self.square_feet {
            property.square_feet = square_feet;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(images) = &self.images {
            property.images = images.clone();
        }
        if let Some(amenities) = &self.amenities {
            property.amenities = amenities.clone();
        }
        if let Some(listing_date) = self.listing_date {
            property.listing_date = listing_date;
        }
        if let Some(coordinates) = &self.coordinates {
            property.coordinates = coordinates.clone();
        }
    }
}

/// A user's bookmark of one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub id: u32,
    /// References `Property.id`. Older record stores wrote this as a string,
    /// so decoding accepts both forms; the integer is canonical.
    #[serde(deserialize_with = "property_id_from_number_or_string")]
    pub property_id: u32,
    pub saved_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

fn property_id_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
