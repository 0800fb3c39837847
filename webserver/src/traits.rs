//! Service trait definitions for dependency injection
//!
//! Storage of appraisals is abstracted through these traits for testability

use std::sync::Arc;
use async_trait::async_trait;

use shared::{
    Appraisal, AppraisalId, AppraisalStatus, ComparableAdjustment, ComparableSale, SubjectProperty,
};
use crate::core::AdjustmentEngine;
use crate::error::WebServerResult;

/// Appraisal workspace storage trait
///
/// Holds subjects and comparables only. Derived values (reconciled value,
/// per-comparable adjustments) are computed by the caller on every read.
#[mockall::automock]
#[async_trait]
pub trait AppraisalStore: Send + Sync {
    /// Create a new draft appraisal for a subject
    async fn create(&self, subject: SubjectProperty) -> WebServerResult<Appraisal>;

    /// Fetch an appraisal by id
    async fn get(&self, id: AppraisalId) -> WebServerResult<Appraisal>;

    /// All appraisals, most recently updated first
    async fn list(&self) -> WebServerResult<Vec<Appraisal>>;

    /// Replace the subject property
    async fn update_subject(&self, id: AppraisalId, subject: SubjectProperty) -> WebServerResult<Appraisal>;

    /// Change lifecycle status
    async fn set_status(&self, id: AppraisalId, status: AppraisalStatus) -> WebServerResult<Appraisal>;

    /// Append a comparable, returning its index
    async fn add_comparable(&self, id: AppraisalId, comparable: ComparableSale) -> WebServerResult<usize>;

    /// Remove a comparable by index
    async fn remove_comparable(&self, id: AppraisalId, index: usize) -> WebServerResult<ComparableSale>;

    /// Adjust the comparable at `index` against the current subject and
    /// persist its adjusted price and notes, all under one write lock
    async fn recompute(
        &self,
        id: AppraisalId,
        index: usize,
        engine: &AdjustmentEngine,
    ) -> WebServerResult<(ComparableSale, ComparableAdjustment)>;

    /// Delete an appraisal
    async fn delete(&self, id: AppraisalId) -> WebServerResult<()>;

    /// Number of stored appraisals
    async fn count(&self) -> usize;
}

/// Shared handles to a store are stores themselves
#[async_trait]
impl<T> AppraisalStore for Arc<T>
where
    T: AppraisalStore + ?Sized,
{
    async fn create(&self, subject: SubjectProperty) -> WebServerResult<Appraisal> {
        (**self).create(subject).await
    }

    async fn get(&self, id: AppraisalId) -> WebServerResult<Appraisal> {
        (**self).get(id).await
    }

    async fn list(&self) -> WebServerResult<Vec<Appraisal>> {
        (**self).list().await
    }

    async fn update_subject(&self, id: AppraisalId, subject: SubjectProperty) -> WebServerResult<Appraisal> {
        (**self).update_subject(id, subject).await
    }

    async fn set_status(&self, id: AppraisalId, status: AppraisalStatus) -> WebServerResult<Appraisal> {
        (**self).set_status(id, status).await
    }

    async fn add_comparable(&self, id: AppraisalId, comparable: ComparableSale) -> WebServerResult<usize> {
        (**self).add_comparable(id, comparable).await
    }

    async fn remove_comparable(&self, id: AppraisalId, index: usize) -> WebServerResult<ComparableSale> {
        (**self).remove_comparable(id, index).await
    }

    async fn recompute(
        &self,
        id: AppraisalId,
        index: usize,
        engine: &AdjustmentEngine,
    ) -> WebServerResult<(ComparableSale, ComparableAdjustment)> {
        (**self).recompute(id, index, engine).await
    }

    async fn delete(&self, id: AppraisalId) -> WebServerResult<()> {
        (**self).delete(id).await
    }

    async fn count(&self) -> usize {
        (**self).count().await
    }
}
