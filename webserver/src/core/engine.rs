//! Adjustment engine
//!
//! Holds the configured rates and runs the full appraisal pipeline:
//! adjust every comparable against the subject, write the fresh results back
//! onto the comparables, then reconcile.

use shared::{
    AdjustmentRates, ComparableAdjustment, ComparableSale, ReconcileResponse, SubjectProperty,
};
use shared::{logging::WEBSERVER_SERVICE, service_debug};

use super::adjustments::compute_adjustments_with;
use super::reconciliation::reconcile_comparables;

/// Stateless apart from its rates; cheap to clone and share between handlers
#[derive(Clone, Debug, Default)]
pub struct AdjustmentEngine {
    rates: AdjustmentRates,
}

impl AdjustmentEngine {
    /// Create engine with the default rate table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom rates
    pub fn with_rates(rates: AdjustmentRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &AdjustmentRates {
        &self.rates
    }

    /// Adjust a single comparable
    pub fn adjust(&self, subject: &SubjectProperty, comparable: &ComparableSale) -> ComparableAdjustment {
        let result = compute_adjustments_with(&self.rates, subject, comparable);
        service_debug!(
            WEBSERVER_SERVICE,
            sale_price = comparable.sale_price,
            adjusted_price = result.adjusted_price,
            lines = result.lines.len(),
            "Adjusted comparable"
        );
        result
    }

    /// Copy of `comparable` with `adjusted_price`/`adjustment_notes` replaced by fresh values
    pub fn apply(&self, subject: &SubjectProperty, comparable: &ComparableSale) -> (ComparableSale, ComparableAdjustment) {
        let adjustment = self.adjust(subject, comparable);
        let mut updated = comparable.clone();
        updated.adjusted_price = Some(adjustment.adjusted_price);
        updated.adjustment_notes = Some(adjustment.notes.clone());
        (updated, adjustment)
    }

    /// Recompute every comparable from scratch, then reconcile
    pub fn appraise(&self, subject: &SubjectProperty, comparables: &[ComparableSale]) -> ReconcileResponse {
        let (comparables, adjustments): (Vec<_>, Vec<_>) = comparables
            .iter()
            .map(|comparable| self.apply(subject, comparable))
            .unzip();

        let reconciled_value = reconcile_comparables(&comparables);
        service_debug!(
            WEBSERVER_SERVICE,
            comparable_count = comparables.len(),
            reconciled_value,
            "Reconciled appraisal"
        );

        ReconcileResponse {
            comparables,
            adjustments,
            reconciled_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> SubjectProperty {
        SubjectProperty {
            city: Some("Austin".to_string()),
            square_feet: Some(2000.0),
            bedrooms: Some(4),
            bathrooms: Some(2.0),
            year_built: Some(2010),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_overwrites_stale_fields() {
        let engine = AdjustmentEngine::new();
        let comparable = ComparableSale {
            city: Some("Austin".to_string()),
            square_feet: Some(1900.0),
            adjusted_price: Some(1.0),
            adjustment_notes: Some("stale".to_string()),
            ..ComparableSale::with_price(480_000.0)
        };

        let (updated, adjustment) = engine.apply(&subject(), &comparable);
        assert_eq!(updated.adjusted_price, Some(490_000.0));
        assert_eq!(updated.adjustment_notes.as_deref(), Some("Square Feet: +$10,000"));
        assert_eq!(adjustment.adjusted_price, 490_000.0);
        assert_eq!(updated.sale_price, 480_000.0);
    }

    #[test]
    fn test_appraise_reconciles_fresh_values() {
        let engine = AdjustmentEngine::new();
        let comparables = vec![
            ComparableSale {
                city: Some("Austin".to_string()),
                square_feet: Some(2100.0),
                // stale value must not leak into the average
                adjusted_price: Some(9_999_999.0),
                ..ComparableSale::with_price(500_000.0)
            },
            ComparableSale {
                city: Some("Austin".to_string()),
                square_feet: Some(1900.0),
                ..ComparableSale::with_price(500_000.0)
            },
        ];

        let result = engine.appraise(&subject(), &comparables);
        assert_eq!(result.comparables[0].adjusted_price, Some(490_000.0));
        assert_eq!(result.comparables[1].adjusted_price, Some(510_000.0));
        assert_eq!(result.adjustments.len(), 2);
        assert_eq!(result.reconciled_value, 500_000.0);
    }

    #[test]
    fn test_appraise_without_comparables() {
        let result = AdjustmentEngine::new().appraise(&subject(), &[]);
        assert!(result.comparables.is_empty());
        assert_eq!(result.reconciled_value, 0.0);
    }

    #[test]
    fn test_engine_uses_its_rates() {
        let engine = AdjustmentEngine::with_rates(AdjustmentRates {
            location_flat: 25_000.0,
            ..Default::default()
        });
        let comparable = ComparableSale {
            city: Some("Dallas".to_string()),
            ..ComparableSale::with_price(300_000.0)
        };
        let result = engine.adjust(&subject(), &comparable);
        assert_eq!(result.adjusted_price, 325_000.0);
        assert_eq!(result.notes, "Location: +$25,000");
    }
}
