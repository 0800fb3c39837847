//! Reconciliation of adjusted comparable prices into one value estimate

use shared::ComparableSale;

/// Unweighted mean of the usable adjusted prices, rounded half-up.
///
/// `None` and NaN entries are excluded from both the sum and the count.
/// Returns 0 when nothing usable remains.
pub fn reconcile<I>(adjusted_prices: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = adjusted_prices
        .into_iter()
        .flatten()
        .filter(|price| !price.is_nan())
        .fold((0.0_f64, 0_usize), |(sum, count), price| (sum + price, count + 1));

    if count == 0 {
        return 0.0;
    }

    round_half_up(sum / count as f64)
}

/// Reconcile the `adjusted_price` already attached to each comparable
pub fn reconcile_comparables(comparables: &[ComparableSale]) -> f64 {
    reconcile(comparables.iter().map(|comp| comp.adjusted_price))
}

/// Round to the nearest whole unit, halves toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    // `round` sends halves away from zero; only negative halves need correcting
    if value - value.trunc() == -0.5 {
        value.ceil()
    } else {
        value.round()
    }
}
