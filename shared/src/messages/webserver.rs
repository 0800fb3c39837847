//! Dashboard ↔ WebServer REST messages
//!
//! Request and response bodies for the appraisal API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::adjustment::ComparableAdjustment;
use crate::types::{Appraisal, AppraisalId, AppraisalStatus, ComparableSale, SubjectProperty};

/// Body of `POST /api/adjustments`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AdjustmentRequest {
    pub subject: SubjectProperty,
    pub comparable: ComparableSale,
}

/// Body of `POST /api/reconcile`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReconcileRequest {
    pub subject: SubjectProperty,
    #[serde(default)]
    pub comparables: Vec<ComparableSale>,
}

/// Full pipeline result: comparables with fresh adjusted fields and the reconciled value
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReconcileResponse {
    pub comparables: Vec<ComparableSale>,
    pub adjustments: Vec<ComparableAdjustment>,
    pub reconciled_value: f64,
}

/// Body of `POST /api/appraisals`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateAppraisalRequest {
    #[serde(default)]
    pub subject: SubjectProperty,
}

/// Body of `PATCH /api/appraisals/:id/status`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatusUpdateRequest {
    pub status: AppraisalStatus,
}

/// Appraisal as rendered to the dashboard, with derived values recomputed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppraisalView {
    pub appraisal: Appraisal,
    pub adjustments: Vec<ComparableAdjustment>,
    pub reconciled_value: f64,
}

/// Row in the appraisal list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppraisalSummary {
    pub id: AppraisalId,
    pub address: Option<String>,
    pub city: Option<String>,
    pub status: AppraisalStatus,
    pub comparable_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl From<&Appraisal> for AppraisalSummary {
    fn from(appraisal: &Appraisal) -> Self {
        Self {
            id: appraisal.id,
            address: appraisal.subject.address.clone(),
            city: appraisal.subject.city.clone(),
            status: appraisal.status,
            comparable_count: appraisal.comparables.len(),
            updated_at: appraisal.updated_at,
        }
    }
}

/// Response of `POST /api/appraisals/:id/comparables`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComparableAdded {
    pub appraisal_id: AppraisalId,
    pub index: usize,
}
