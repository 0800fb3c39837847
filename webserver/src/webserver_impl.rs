//! Main webserver implementation
//!
//! This module contains the main WebServer struct that wires the appraisal
//! store and the adjustment engine into an axum router.

use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post, put, patch},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use shared::{AdjustmentRates, logging::WEBSERVER_SERVICE, service_info};

use crate::core::AdjustmentEngine;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::AppraisalStore;
use crate::web::handlers::api;

/// Main webserver struct with dependency injection
#[derive(Clone)]
pub struct WebServer<S>
where
    S: AppraisalStore,
{
    state: Arc<WebServerState>,
    store: S,
    engine: AdjustmentEngine,
}

impl<S> WebServer<S>
where
    S: AppraisalStore + Clone + Send + Sync + 'static,
{
    /// Create a new webserver over an existing state and store
    pub fn new(state: Arc<WebServerState>, store: S) -> Self {
        let engine = AdjustmentEngine::with_rates(state.rates);
        Self { state, store, engine }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Health check
            .route("/health", get(api::health_check::<S>))

            // Stateless engine routes
            .route("/api/status", get(api::get_status::<S>))
            .route("/api/adjustments", post(api::compute_adjustment::<S>))
            .route("/api/reconcile", post(api::reconcile::<S>))

            // Appraisal workspace
            .route(
                "/api/appraisals",
                get(api::list_appraisals::<S>).post(api::create_appraisal::<S>),
            )
            .route(
                "/api/appraisals/:id",
                get(api::get_appraisal::<S>).delete(api::delete_appraisal::<S>),
            )
            .route("/api/appraisals/:id/subject", put(api::update_subject::<S>))
            .route("/api/appraisals/:id/status", patch(api::update_status::<S>))
            .route("/api/appraisals/:id/comparables", post(api::add_comparable::<S>))
            .route(
                "/api/appraisals/:id/comparables/:index",
                patch(api::write_back_comparable::<S>).delete(api::remove_comparable::<S>),
            )

            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()) // Dashboard runs on another origin
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the webserver and serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(address).await.map_err(|e| {
            shared::logging::log_error(WEBSERVER_SERVICE, "Bind", &e);
            WebServerError::ServerStartupFailed { address: address.to_string() }
        })?;

        service_info!(WEBSERVER_SERVICE, "🌐 Appraisal API listening on http://{}", address);

        let state = self.state.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    shared::logging::log_shutdown(WEBSERVER_SERVICE, "Received Ctrl+C signal");
                }
                state.set_running(false);
            })
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &AdjustmentEngine {
        &self.engine
    }

    /// Rates the engine was built with
    pub fn rates(&self) -> &AdjustmentRates {
        self.engine.rates()
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.state.bind_address
    }
}
