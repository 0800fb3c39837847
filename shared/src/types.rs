//! Core shared types and identifiers

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::SharedError;

/// Unique identifier for an appraisal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppraisalId(Uuid);

impl AppraisalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for AppraisalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AppraisalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The property being appraised.
///
/// Every field is optional; a missing field suppresses the adjustment
/// category that depends on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectProperty {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub square_feet: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub property_type: Option<String>,
}

/// A recently sold property used as a reference point for the subject.
///
/// `adjusted_price` and `adjustment_notes` are outputs of the adjustment
/// engine and are overwritten on every computation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparableSale {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    pub sale_price: f64,
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub square_feet: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub days_on_market: Option<u32>,
    #[serde(default)]
    pub source: Option<String>,
    /// Distance from the subject in miles; informational, not used for weighting
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub proximity_score: Option<f64>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
    #[serde(default)]
    pub adjusted_price: Option<f64>,
    #[serde(default)]
    pub adjustment_notes: Option<String>,
}

impl ComparableSale {
    /// Minimal comparable with only a sale price
    pub fn with_price(sale_price: f64) -> Self {
        Self {
            sale_price,
            ..Default::default()
        }
    }
}

/// Lifecycle status of an appraisal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppraisalStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
}

impl fmt::Display for AppraisalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppraisalStatus::Draft => write!(f, "draft"),
            AppraisalStatus::InProgress => write!(f, "in_progress"),
            AppraisalStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for AppraisalStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(AppraisalStatus::Draft),
            "in_progress" => Ok(AppraisalStatus::InProgress),
            "completed" => Ok(AppraisalStatus::Completed),
            _ => Err(SharedError::InvalidStatus { input: s.to_string() }),
        }
    }
}

/// An appraisal: one subject property and the comparables selected for it.
///
/// The reconciled value is not stored here; it is derived from the
/// comparables on every read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    pub id: AppraisalId,
    pub subject: SubjectProperty,
    pub comparables: Vec<ComparableSale>,
    pub status: AppraisalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appraisal {
    pub fn new(subject: SubjectProperty) -> Self {
        let now = Utc::now();
        Self {
            id: AppraisalId::new(),
            subject,
            comparables: Vec::new(),
            status: AppraisalStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump `updated_at` after a mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
