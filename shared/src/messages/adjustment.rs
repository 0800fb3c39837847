//! Adjustment engine output types
//!
//! Shared between the engine, the REST layer and dashboard clients.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Adjustment categories, in the order the engine applies them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentCategory {
    Location,
    Size,
    Bedrooms,
    Bathrooms,
    Age,
}

impl AdjustmentCategory {
    pub const ALL: [AdjustmentCategory; 5] = [
        AdjustmentCategory::Location,
        AdjustmentCategory::Size,
        AdjustmentCategory::Bedrooms,
        AdjustmentCategory::Bathrooms,
        AdjustmentCategory::Age,
    ];

    /// Label written into adjustment notes
    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentCategory::Location => "Location",
            AdjustmentCategory::Size => "Square Feet",
            AdjustmentCategory::Bedrooms => "Bedrooms",
            AdjustmentCategory::Bathrooms => "Bathrooms",
            AdjustmentCategory::Age => "Age",
        }
    }
}

impl fmt::Display for AdjustmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One applied adjustment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentLine {
    pub category: AdjustmentCategory,
    pub amount: f64,
}

/// Result of adjusting a single comparable against the subject
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparableAdjustment {
    pub adjusted_price: f64,
    pub notes: String,
    pub lines: Vec<AdjustmentLine>,
    /// Sum of signed adjustment amounts
    pub net_adjustment: f64,
    /// Sum of absolute adjustment amounts
    pub gross_adjustment: f64,
}

impl ComparableAdjustment {
    /// Amount applied for a category, if any line was written for it
    pub fn amount_for(&self, category: AdjustmentCategory) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.amount)
    }
}
