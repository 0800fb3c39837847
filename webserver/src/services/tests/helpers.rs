//! Test helpers for webserver service tests

use crate::services::RealAppraisalStore;
use crate::state::WebServerState;
use shared::AdjustmentRates;
use std::net::SocketAddr;
use std::sync::Arc;

/// Create a test webserver state for testing
pub fn create_test_state() -> Arc<WebServerState> {
    let bind_addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    Arc::new(WebServerState::new(bind_addr, AdjustmentRates::default()))
}

/// Create a store over fresh state, returning both
pub fn create_test_store() -> (RealAppraisalStore, Arc<WebServerState>) {
    let state = create_test_state();
    (RealAppraisalStore::new(state.clone()), state)
}
