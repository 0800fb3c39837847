//! Webserver library for the appraisal system
//!
//! This library hosts the comparable-sales adjustment engine and exposes it,
//! together with an in-memory appraisal workspace, over a REST API consumed
//! by the appraisal dashboard.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use webserver_impl::WebServer;
pub use state::WebServerState;

// Re-export the engine entry points
pub use crate::core::{AdjustmentEngine, compute_adjustments, compute_adjustments_with, reconcile, reconcile_comparables};

// Re-export trait definitions
pub use traits::AppraisalStore;

// Re-export service implementations
pub use services::RealAppraisalStore;
