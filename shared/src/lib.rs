//! Shared types for the appraisal system
//!
//! Domain records, REST message bodies, configuration and logging helpers
//! used by the webserver and by anything that talks to it.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Engine output
    AdjustmentCategory, AdjustmentLine, ComparableAdjustment,

    // Configuration
    AdjustmentRates, ServerConfig,

    // REST bodies
    AdjustmentRequest, AppraisalSummary, AppraisalView, ComparableAdded,
    CreateAppraisalRequest, ReconcileRequest, ReconcileResponse, StatusUpdateRequest,
};
