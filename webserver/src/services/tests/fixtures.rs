//! Test fixtures for webserver service tests

use shared::{ComparableSale, SubjectProperty};

/// Subject used throughout the reference scenarios
pub fn create_test_subject() -> SubjectProperty {
    SubjectProperty {
        address: Some("1200 Barton Hills Dr".to_string()),
        city: Some("Austin".to_string()),
        state: Some("TX".to_string()),
        zip: Some("78704".to_string()),
        square_feet: Some(2000.0),
        bedrooms: Some(4),
        bathrooms: Some(2.0),
        year_built: Some(2010),
        property_type: Some("single_family".to_string()),
    }
}

/// Comparable that differs from the subject only in size and age
pub fn create_test_comparable() -> ComparableSale {
    ComparableSale {
        address: Some("1304 Barton Hills Dr".to_string()),
        city: Some("Austin".to_string()),
        state: Some("TX".to_string()),
        zip: Some("78704".to_string()),
        sale_price: 480_000.0,
        square_feet: Some(1900.0),
        bedrooms: Some(4),
        bathrooms: Some(2.0),
        year_built: Some(2008),
        source: Some("mls".to_string()),
        ..Default::default()
    }
}

/// Comparable with only a price and city
pub fn create_bare_comparable(city: &str, sale_price: f64) -> ComparableSale {
    ComparableSale {
        city: Some(city.to_string()),
        ..ComparableSale::with_price(sale_price)
    }
}
