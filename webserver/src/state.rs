//! Webserver state management
//!
//! This module contains the core state structures used throughout the webserver.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use shared::{AdjustmentRates, Appraisal, AppraisalId};

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    // Server configuration
    pub bind_address: SocketAddr,
    pub rates: AdjustmentRates,

    // Appraisal workspace (in-memory, lost on restart)
    pub appraisals: Arc<RwLock<HashMap<AppraisalId, Appraisal>>>,

    // Server state
    pub is_running: Arc<AtomicBool>,
    pub computation_count: Arc<AtomicU64>,
    pub server_start_time: Instant,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new(bind_address: SocketAddr, rates: AdjustmentRates) -> Self {
        Self {
            bind_address,
            rates,
            appraisals: Arc::new(RwLock::new(HashMap::new())),
            is_running: Arc::new(AtomicBool::new(true)),
            computation_count: Arc::new(AtomicU64::new(0)),
            server_start_time: Instant::now(),
        }
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Set running state
    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Number of engine runs served so far
    pub fn get_computation_count(&self) -> u64 {
        self.computation_count.load(Ordering::Relaxed)
    }

    /// Record `n` comparables pushed through the engine
    pub fn record_computations(&self, n: u64) -> u64 {
        self.computation_count.fetch_add(n, Ordering::Relaxed) + n
    }
}
