//! REST API handlers
//!
//! HTTP endpoints for the adjustment engine and the appraisal workspace

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde_json::{Value, json};

use shared::{
    AdjustmentRequest, Appraisal, AppraisalId, AppraisalSummary, AppraisalView, ComparableAdded,
    ComparableAdjustment, ComparableSale, CreateAppraisalRequest, ReconcileRequest,
    ReconcileResponse, SharedError, StatusUpdateRequest, SubjectProperty,
};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::AppraisalStore;
use crate::web::extract::{JsonBody, PathParams};
use crate::webserver_impl::WebServer;

fn parse_id(raw: &str) -> WebServerResult<AppraisalId> {
    AppraisalId::from_string(raw).map_err(|_| {
        WebServerError::from(SharedError::InvalidUuid {
            input: raw.to_string(),
        })
    })
}

/// Health check endpoint - /health
pub async fn health_check<S>(State(webserver): State<WebServer<S>>) -> Json<Value>
where
    S: AppraisalStore + Clone + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": webserver.state().get_uptime_seconds(),
    }))
}

/// Get server status - /api/status
pub async fn get_status<S>(State(webserver): State<WebServer<S>>) -> Json<Value>
where
    S: AppraisalStore + Clone + 'static,
{
    let state = webserver.state();
    let server_status = if state.is_running() { "running" } else { "stopping" };
    let appraisal_count = webserver.store().count().await;

    Json(json!({
        "status": "ok",
        "data": {
            "server_status": server_status,
            "uptime_seconds": state.get_uptime_seconds(),
            "appraisal_count": appraisal_count,
            "computations": state.get_computation_count(),
            "rates": webserver.engine().rates(),
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Adjust one comparable against a subject - /api/adjustments
pub async fn compute_adjustment<S>(
    State(webserver): State<WebServer<S>>,
    JsonBody(request): JsonBody<AdjustmentRequest>,
) -> Json<ComparableAdjustment>
where
    S: AppraisalStore + Clone + 'static,
{
    let result = webserver.engine().adjust(&request.subject, &request.comparable);
    webserver.state().record_computations(1);
    Json(result)
}

/// Stateless full pipeline - /api/reconcile
pub async fn reconcile<S>(
    State(webserver): State<WebServer<S>>,
    JsonBody(request): JsonBody<ReconcileRequest>,
) -> Json<ReconcileResponse>
where
    S: AppraisalStore + Clone + 'static,
{
    let result = webserver.engine().appraise(&request.subject, &request.comparables);
    webserver.state().record_computations(request.comparables.len() as u64);
    Json(result)
}

/// List appraisals - GET /api/appraisals
pub async fn list_appraisals<S>(
    State(webserver): State<WebServer<S>>,
) -> WebServerResult<Json<Vec<AppraisalSummary>>>
where
    S: AppraisalStore + Clone + 'static,
{
    let appraisals = webserver.store().list().await?;
    Ok(Json(appraisals.iter().map(AppraisalSummary::from).collect()))
}

/// Create appraisal - POST /api/appraisals
pub async fn create_appraisal<S>(
    State(webserver): State<WebServer<S>>,
    JsonBody(request): JsonBody<CreateAppraisalRequest>,
) -> WebServerResult<(StatusCode, Json<Appraisal>)>
where
    S: AppraisalStore + Clone + 'static,
{
    let appraisal = webserver.store().create(request.subject).await?;
    Ok((StatusCode::CREATED, Json(appraisal)))
}

/// Appraisal with adjustments and reconciled value recomputed on every read -
/// GET /api/appraisals/:id
pub async fn get_appraisal<S>(
    State(webserver): State<WebServer<S>>,
    PathParams(id): PathParams<String>,
) -> WebServerResult<Json<AppraisalView>>
where
    S: AppraisalStore + Clone + 'static,
{
    let mut appraisal = webserver.store().get(parse_id(&id)?).await?;

    let result = webserver.engine().appraise(&appraisal.subject, &appraisal.comparables);
    webserver.state().record_computations(appraisal.comparables.len() as u64);
    appraisal.comparables = result.comparables;

    Ok(Json(AppraisalView {
        appraisal,
        adjustments: result.adjustments,
        reconciled_value: result.reconciled_value,
    }))
}

/// Replace subject property - PUT /api/appraisals/:id/subject
pub async fn update_subject<S>(
    State(webserver): State<WebServer<S>>,
    PathParams(id): PathParams<String>,
    JsonBody(subject): JsonBody<SubjectProperty>,
) -> WebServerResult<Json<Appraisal>>
where
    S: AppraisalStore + Clone + 'static,
{
    let appraisal = webserver.store().update_subject(parse_id(&id)?, subject).await?;
    Ok(Json(appraisal))
}

/// Change status - PATCH /api/appraisals/:id/status
pub async fn update_status<S>(
    State(webserver): State<WebServer<S>>,
    PathParams(id): PathParams<String>,
    JsonBody(request): JsonBody<StatusUpdateRequest>,
) -> WebServerResult<Json<Appraisal>>
where
    S: AppraisalStore + Clone + 'static,
{
    let appraisal = webserver.store().set_status(parse_id(&id)?, request.status).await?;
    Ok(Json(appraisal))
}

/// Delete appraisal - DELETE /api/appraisals/:id
pub async fn delete_appraisal<S>(
    State(webserver): State<WebServer<S>>,
    PathParams(id): PathParams<String>,
) -> WebServerResult<StatusCode>
where
    S: AppraisalStore + Clone + 'static,
{
    webserver.store().delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add comparable - POST /api/appraisals/:id/comparables
pub async fn add_comparable<S>(
    State(webserver): State<WebServer<S>>,
    PathParams(id): PathParams<String>,
    JsonBody(comparable): JsonBody<ComparableSale>,
) -> WebServerResult<(StatusCode, Json<ComparableAdded>)>
where
    S: AppraisalStore + Clone + 'static,
{
    let appraisal_id = parse_id(&id)?;
    let index = webserver.store().add_comparable(appraisal_id, comparable).await?;
    Ok((StatusCode::CREATED, Json(ComparableAdded { appraisal_id, index })))
}

/// Remove comparable - DELETE /api/appraisals/:id/comparables/:index
pub async fn remove_comparable<S>(
    State(webserver): State<WebServer<S>>,
    PathParams((id, index)): PathParams<(String, usize)>,
) -> WebServerResult<Json<ComparableSale>>
where
    S: AppraisalStore + Clone + 'static,
{
    let removed = webserver.store().remove_comparable(parse_id(&id)?, index).await?;
    Ok(Json(removed))
}

/// Recompute one comparable and persist its adjusted price and notes -
/// PATCH /api/appraisals/:id/comparables/:index
pub async fn write_back_comparable<S>(
    State(webserver): State<WebServer<S>>,
    PathParams((id, index)): PathParams<(String, usize)>,
) -> WebServerResult<Json<Value>>
where
    S: AppraisalStore + Clone + 'static,
{
    let appraisal_id = parse_id(&id)?;
    let (stored, adjustment) = webserver
        .store()
        .recompute(appraisal_id, index, webserver.engine())
        .await?;
    webserver.state().record_computations(1);

    tracing::info!(
        appraisal_id = %appraisal_id,
        index,
        adjusted_price = adjustment.adjusted_price,
        "💾 Persisted comparable adjustments"
    );

    Ok(Json(json!({
        "status": "success",
        "comparable": stored,
        "adjustment": adjustment,
    })))
}
