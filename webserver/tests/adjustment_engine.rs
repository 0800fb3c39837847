//! Adjustment and reconciliation behaviour through the public engine API

mod common;

use common::*;
use shared::{AdjustmentCategory, AdjustmentRates, ComparableSale, SubjectProperty};
use webserver::{AdjustmentEngine, compute_adjustments, reconcile, reconcile_comparables};

#[test]
fn test_reference_scenario() {
    let result = compute_adjustments(&austin_subject(), &austin_comparable());

    assert_eq!(result.notes, "Square Feet: +$10,000\nAge: +$2,000");
    assert_eq!(result.adjusted_price, 492_000.0);
    assert_eq!(result.net_adjustment, 12_000.0);
}

#[test]
fn test_same_city_never_gets_location_line() {
    let subject = austin_subject();
    for price in [100_000.0, 480_000.0, 1_250_000.0] {
        let result = compute_adjustments(&subject, &bare_comparable("Austin", price));
        assert!(!result.notes.contains("Location"));
        assert_eq!(result.adjusted_price, price);
    }
}

#[test]
fn test_different_city_gets_flat_location_regardless_of_distance() {
    let subject = austin_subject();
    let near = ComparableSale {
        distance: Some(0.5),
        ..bare_comparable("Sunset Valley", 400_000.0)
    };
    let far = ComparableSale {
        distance: Some(180.0),
        ..bare_comparable("Houston", 400_000.0)
    };

    for comp in [near, far] {
        let result = compute_adjustments(&subject, &comp);
        assert_eq!(result.amount_for(AdjustmentCategory::Location), Some(10_000.0));
        assert_eq!(result.notes, "Location: +$10,000");
    }
}

#[test]
fn test_missing_square_feet_only_drops_size() {
    let mut comparable = austin_comparable();
    comparable.square_feet = None;
    comparable.bedrooms = Some(3);

    let result = compute_adjustments(&austin_subject(), &comparable);
    assert!(!result.notes.contains("Square Feet"));
    assert_eq!(result.notes, "Bedrooms: +$10,000\nAge: +$2,000");
    assert_eq!(result.adjusted_price, 492_000.0);
}

#[test]
fn test_subject_newer_smaller_and_fewer_baths() {
    let subject = SubjectProperty {
        square_feet: Some(1800.0),
        bathrooms: Some(1.5),
        year_built: Some(2020),
        ..Default::default()
    };
    let comparable = ComparableSale {
        square_feet: Some(1850.0),
        bathrooms: Some(2.0),
        year_built: Some(1995),
        ..ComparableSale::with_price(350_000.0)
    };

    let result = compute_adjustments(&subject, &comparable);
    assert_eq!(result.notes, "Square Feet: -$5,000\nBathrooms: -$7,500\nAge: +$25,000");
    assert_eq!(result.adjusted_price, 362_500.0);
    assert_eq!(result.gross_adjustment, 37_500.0);
}

#[test]
fn test_compute_is_idempotent() {
    let subject = austin_subject();
    let comparable = bare_comparable("Dallas", 410_000.0);
    assert_eq!(
        compute_adjustments(&subject, &comparable),
        compute_adjustments(&subject, &comparable)
    );
}

#[test]
fn test_reconcile_edge_cases() {
    assert_eq!(reconcile(Vec::<Option<f64>>::new()), 0.0);
    assert_eq!(reconcile([Some(500_000.0)]), 500_000.0);
    assert_eq!(reconcile([Some(490_000.0), Some(510_000.0)]), 500_000.0);
    assert_eq!(reconcile([Some(490_000.0), None, Some(f64::NAN)]), 490_000.0);
}

#[test]
fn test_reconcile_ignores_similarity_scores() {
    let comps = vec![
        ComparableSale {
            adjusted_price: Some(400_000.0),
            similarity_score: Some(0.99),
            proximity_score: Some(0.95),
            ..ComparableSale::with_price(400_000.0)
        },
        ComparableSale {
            adjusted_price: Some(600_000.0),
            similarity_score: Some(0.10),
            proximity_score: Some(0.05),
            ..ComparableSale::with_price(600_000.0)
        },
    ];
    assert_eq!(reconcile_comparables(&comps), 500_000.0);
}

#[test]
fn test_engine_pipeline_recomputes_and_reconciles() {
    let engine = AdjustmentEngine::new();
    let mut comps = balanced_pair();
    comps[0].adjustment_notes = Some("Location: +$10,000".to_string());

    let result = engine.appraise(&austin_subject(), &comps);
    assert_eq!(result.reconciled_value, 500_000.0);
    assert_eq!(result.comparables[0].adjustment_notes.as_deref(), Some("Square Feet: -$10,000"));
    assert_eq!(result.comparables[1].adjustment_notes.as_deref(), Some("Square Feet: +$10,000"));
}

#[test]
fn test_engine_with_configured_rates() {
    let engine = AdjustmentEngine::with_rates(AdjustmentRates {
        per_square_foot: 200.0,
        ..Default::default()
    });
    let result = engine.appraise(&austin_subject(), &balanced_pair());
    assert_eq!(result.comparables[0].adjusted_price, Some(480_000.0));
    assert_eq!(result.comparables[1].adjusted_price, Some(520_000.0));
    assert_eq!(result.reconciled_value, 500_000.0);
}
