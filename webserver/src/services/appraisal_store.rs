//! Appraisal store service implementation
//!
//! In-memory appraisal workspace kept on the shared webserver state.

use std::sync::Arc;
use tracing::{debug, info};

use shared::{
    Appraisal, AppraisalId, AppraisalStatus, ComparableAdjustment, ComparableSale, SubjectProperty,
};
use crate::core::AdjustmentEngine;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::AppraisalStore;

/// Real appraisal store implementation
#[derive(Clone)]
pub struct RealAppraisalStore {
    state: Arc<WebServerState>,
}

impl RealAppraisalStore {
    /// Create a store backed by the webserver state
    pub fn new(state: Arc<WebServerState>) -> Self {
        Self { state }
    }

    /// Run a mutation against one appraisal and bump its timestamp
    async fn modify<T, F>(&self, id: AppraisalId, mutate: F) -> WebServerResult<T>
    where
        F: FnOnce(&mut Appraisal) -> WebServerResult<T>,
    {
        let mut appraisals = self.state.appraisals.write().await;
        let appraisal = appraisals
            .get_mut(&id)
            .ok_or(WebServerError::AppraisalNotFound { id })?;

        let result = mutate(appraisal)?;
        appraisal.touch();
        Ok(result)
    }
}

#[async_trait::async_trait]
impl AppraisalStore for RealAppraisalStore {
    async fn create(&self, subject: SubjectProperty) -> WebServerResult<Appraisal> {
        let appraisal = Appraisal::new(subject);
        let mut appraisals = self.state.appraisals.write().await;
        appraisals.insert(appraisal.id, appraisal.clone());

        info!(appraisal_id = %appraisal.id, total = appraisals.len(), "📝 Created appraisal");
        Ok(appraisal)
    }

    async fn get(&self, id: AppraisalId) -> WebServerResult<Appraisal> {
        let appraisals = self.state.appraisals.read().await;
        appraisals
            .get(&id)
            .cloned()
            .ok_or(WebServerError::AppraisalNotFound { id })
    }

    async fn list(&self) -> WebServerResult<Vec<Appraisal>> {
        let appraisals = self.state.appraisals.read().await;
        let mut all: Vec<Appraisal> = appraisals.values().cloned().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    async fn update_subject(&self, id: AppraisalId, subject: SubjectProperty) -> WebServerResult<Appraisal> {
        self.modify(id, |appraisal| {
            appraisal.subject = subject;
            Ok(())
        })
        .await?;
        debug!(appraisal_id = %id, "Replaced subject property");
        self.get(id).await
    }

    async fn set_status(&self, id: AppraisalId, status: AppraisalStatus) -> WebServerResult<Appraisal> {
        self.modify(id, |appraisal| {
            appraisal.status = status;
            Ok(())
        })
        .await?;
        info!(appraisal_id = %id, status = %status, "Appraisal status changed");
        self.get(id).await
    }

    async fn add_comparable(&self, id: AppraisalId, comparable: ComparableSale) -> WebServerResult<usize> {
        let index = self
            .modify(id, |appraisal| {
                appraisal.comparables.push(comparable);
                Ok(appraisal.comparables.len() - 1)
            })
            .await?;
        debug!(appraisal_id = %id, index, "Added comparable");
        Ok(index)
    }

    async fn remove_comparable(&self, id: AppraisalId, index: usize) -> WebServerResult<ComparableSale> {
        let removed = self
            .modify(id, |appraisal| {
                if index >= appraisal.comparables.len() {
                    return Err(WebServerError::ComparableNotFound { id, index });
                }
                Ok(appraisal.comparables.remove(index))
            })
            .await?;
        debug!(appraisal_id = %id, index, "Removed comparable");
        Ok(removed)
    }

    async fn recompute(
        &self,
        id: AppraisalId,
        index: usize,
        engine: &AdjustmentEngine,
    ) -> WebServerResult<(ComparableSale, ComparableAdjustment)> {
        let (updated, adjustment) = self
            .modify(id, |appraisal| {
                let comparable = appraisal
                    .comparables
                    .get(index)
                    .ok_or(WebServerError::ComparableNotFound { id, index })?;
                let (updated, adjustment) = engine.apply(&appraisal.subject, comparable);
                appraisal.comparables[index] = updated.clone();
                Ok((updated, adjustment))
            })
            .await?;
        debug!(appraisal_id = %id, index, adjusted_price = adjustment.adjusted_price, "Recomputed comparable");
        Ok((updated, adjustment))
    }

    async fn delete(&self, id: AppraisalId) -> WebServerResult<()> {
        let mut appraisals = self.state.appraisals.write().await;
        match appraisals.remove(&id) {
            Some(_) => {
                info!(appraisal_id = %id, total = appraisals.len(), "🗑️ Deleted appraisal");
                Ok(())
            }
            None => Err(WebServerError::AppraisalNotFound { id }),
        }
    }

    async fn count(&self) -> usize {
        self.state.appraisals.read().await.len()
    }
}
