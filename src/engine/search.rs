use crate::models::Property;

/// Narrow `properties` to those matching the free-text `query`.
///
/// An empty or all-whitespace query passes the input through untouched.
/// Otherwise a property stays when the lower-cased query appears in its
/// title, street or city (compared lower-cased), or in its zip code as
/// typed. Relative order is preserved; there is no ranking.
pub fn narrow(query: &str, properties: Vec<Property>) -> Vec<Property> {
    if query.trim().is_empty() {
        return properties;
    }

    let term = query.to_lowercase();
    properties
        .into_iter()
        .filter(|property| matches(property, &term))
        .collect()
}

fn matches(property: &Property, term: &str) -> bool {
    property.title.to_lowercase().contains(term)
        || property.address.street.to_lowercase().contains(term)
        || property.address.city.to_lowercase().contains(term)
        || property.address.zip_code.contains(term)
}
