//! Test fixtures for webserver integration tests

use shared::{ComparableSale, SubjectProperty};

/// Subject from the reference scenario
pub fn austin_subject() -> SubjectProperty {
    SubjectProperty {
        address: Some("1200 Barton Hills Dr".to_string()),
        city: Some("Austin".to_string()),
        state: Some("TX".to_string()),
        square_feet: Some(2000.0),
        bedrooms: Some(4),
        bathrooms: Some(2.0),
        year_built: Some(2010),
        ..Default::default()
    }
}

/// Same-city comparable, 100 sqft smaller and two years older
pub fn austin_comparable() -> ComparableSale {
    ComparableSale {
        city: Some("Austin".to_string()),
        sale_price: 480_000.0,
        square_feet: Some(1900.0),
        bedrooms: Some(4),
        bathrooms: Some(2.0),
        year_built: Some(2008),
        ..Default::default()
    }
}

/// Comparable with only city and price populated
pub fn bare_comparable(city: &str, sale_price: f64) -> ComparableSale {
    ComparableSale {
        city: Some(city.to_string()),
        ..ComparableSale::with_price(sale_price)
    }
}

/// Comparables whose adjusted prices come out at 490,000 and 510,000
pub fn balanced_pair() -> Vec<ComparableSale> {
    vec![
        ComparableSale {
            city: Some("Austin".to_string()),
            square_feet: Some(2100.0),
            ..ComparableSale::with_price(500_000.0)
        },
        ComparableSale {
            city: Some("Austin".to_string()),
            square_feet: Some(1900.0),
            ..ComparableSale::with_price(500_000.0)
        },
    ]
}
