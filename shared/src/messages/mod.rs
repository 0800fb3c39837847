//! Message types for the appraisal system
//!
//! - `adjustment`: Adjustment engine output shared with clients
//! - `webserver`: Dashboard ↔ WebServer REST bodies
//! - `config`: Adjustment rates and server configuration

pub mod adjustment;
pub mod config;
pub mod webserver;

pub use adjustment::{AdjustmentCategory, AdjustmentLine, ComparableAdjustment};

pub use config::{AdjustmentRates, ServerConfig};

pub use webserver::{
    AdjustmentRequest, AppraisalSummary, AppraisalView, ComparableAdded,
    CreateAppraisalRequest, ReconcileRequest, ReconcileResponse, StatusUpdateRequest,
};
