//! Comparable-sales adjustment calculation
//!
//! Pure business logic: given a subject and one comparable, produce the
//! per-category dollar adjustments and the adjusted sale price.

use shared::{
    AdjustmentCategory, AdjustmentLine, AdjustmentRates, ComparableAdjustment, ComparableSale,
    SubjectProperty,
};

/// Adjust a comparable using the default rates
pub fn compute_adjustments(subject: &SubjectProperty, comparable: &ComparableSale) -> ComparableAdjustment {
    compute_adjustments_with(&AdjustmentRates::default(), subject, comparable)
}

/// Adjust a comparable using explicit rates.
///
/// Categories are applied in fixed order and only when both sides carry the
/// relevant field. A category whose amount rounds to zero cents writes no
/// line and does not move the adjusted price.
/// Notes are always rebuilt from scratch; whatever the comparable already
/// holds in `adjustment_notes` is ignored.
pub fn compute_adjustments_with(
    rates: &AdjustmentRates,
    subject: &SubjectProperty,
    comparable: &ComparableSale,
) -> ComparableAdjustment {
    let lines: Vec<AdjustmentLine> = AdjustmentCategory::ALL
        .iter()
        .filter_map(|&category| {
            category_amount(rates, category, subject, comparable)
                .filter(|amount| !rounds_to_zero_cents(*amount))
                .map(|amount| AdjustmentLine { category, amount })
        })
        .collect();

    let net_adjustment: f64 = lines.iter().map(|line| line.amount).sum();
    let gross_adjustment: f64 = lines.iter().map(|line| line.amount.abs()).sum();

    let notes = lines
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string();

    ComparableAdjustment {
        adjusted_price: comparable.sale_price + net_adjustment,
        notes,
        lines,
        net_adjustment,
        gross_adjustment,
    }
}

/// Signed amount for one category, or `None` when either side lacks the data
fn category_amount(
    rates: &AdjustmentRates,
    category: AdjustmentCategory,
    subject: &SubjectProperty,
    comparable: &ComparableSale,
) -> Option<f64> {
    match category {
        AdjustmentCategory::Location => {
            let (subject_city, comp_city) = (subject.city.as_ref()?, comparable.city.as_ref()?);
            (subject_city != comp_city).then_some(rates.location_flat)
        }
        AdjustmentCategory::Size => {
            Some((subject.square_feet? - comparable.square_feet?) * rates.per_square_foot)
        }
        AdjustmentCategory::Bedrooms => {
            let diff = f64::from(subject.bedrooms?) - f64::from(comparable.bedrooms?);
            Some(diff * rates.per_bedroom)
        }
        AdjustmentCategory::Bathrooms => {
            Some((subject.bathrooms? - comparable.bathrooms?) * rates.per_bathroom)
        }
        AdjustmentCategory::Age => {
            let diff = f64::from(subject.year_built?) - f64::from(comparable.year_built?);
            Some(diff * rates.per_year_built)
        }
    }
}

fn rounds_to_zero_cents(amount: f64) -> bool {
    (amount * 100.0).round() == 0.0
}

/// Render a line as `<Label>: <+/->$<amount>`
pub fn format_line(line: &AdjustmentLine) -> String {
    format!("{}: {}", line.category.label(), format_signed_currency(line.amount))
}

/// `+$10,000`, `-$2,500.50`
pub fn format_signed_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };
    let magnitude = amount.abs();

    if !magnitude.is_finite() {
        return format!("{sign}${magnitude}");
    }

    let rendered = if magnitude.fract() == 0.0 {
        format!("{magnitude:.0}")
    } else {
        format!("{magnitude:.2}")
    };

    let (whole, cents) = match rendered.split_once('.') {
        Some((whole, cents)) => (whole, Some(cents)),
        None => (rendered.as_str(), None),
    };

    match cents {
        Some(cents) => format!("{sign}${}.{cents}", group_thousands(whole)),
        None => format!("{sign}${}", group_thousands(whole)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
