use serde::{Deserialize, Serialize};

use crate::models::{Property, PropertyType};

/// Multi-dimension filter over property listings
///
/// Every dimension is optional; `Default` leaves them all inactive, which
/// makes the filter the identity. Active dimensions combine with AND and all
/// numeric bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Lowest acceptable price (inclusive)
    pub price_min: Option<i64>,
    /// Highest acceptable price (inclusive)
    pub price_max: Option<i64>,
    /// Acceptable property types; empty means any
    pub property_types: Vec<PropertyType>,
    /// Minimum number of bedrooms
    pub bedrooms_min: Option<u32>,
    /// Minimum number of bathrooms
    pub bathrooms_min: Option<f32>,
    /// Minimum size in square feet
    pub square_feet_min: Option<i32>,
    /// Amenities a listing must all offer; empty means any
    pub amenities: Vec<String>,
}

impl FilterCriteria {
    /// True when no dimension restricts the result
    pub fn is_inactive(&self) -> bool {
        self.price_min.is_none()
            && self.price_max.is_none()
            && self.property_types.is_empty()
            && self.bedrooms_min.is_none()
            && self.bathrooms_min.is_none()
            && self.square_feet_min.is_none()
            && self.amenities.is_empty()
    }

    /// Reset every dimension to inactive
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(min) = self.price_min {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if property.price > max {
                return false;
            }
        }
        if !self.property_types.is_empty() && !self.property_types.contains(&property.property_type)
        {
            return false;
        }
        if let Some(min) = self.bedrooms_min {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = self.bathrooms_min {
            if property.bathrooms < min {
                return false;
            }
        }
        if let Some(min) = self.square_feet_min {
            if property.square_feet < min {
                return false;
            }
        }
        // Every requested amenity must be present on the listing
        self.amenities
            .iter()
            .all(|amenity| property.amenities.contains(amenity))
    }
}

/// Keep the properties matching `criteria`, preserving input order
pub fn apply(criteria: &FilterCriteria, properties: Vec<Property>) -> Vec<Property> {
    if criteria.is_inactive() {
        return properties;
    }

    properties
        .into_iter()
        .filter(|property| criteria.matches(property))
        .collect()
}

/// Amenities the filter panel offers
pub fn known_amenities() -> &'static [&'static str] {
    &[
        "Pool",
        "Gym",
        "Parking",
        "Balcony",
        "Garden",
        "Fireplace",
        "Air Conditioning",
        "Dishwasher",
        "Washer/Dryer",
        "Pet Friendly",
    ]
}
