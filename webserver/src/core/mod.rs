//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod adjustments;
pub mod engine;
pub mod reconciliation;

// Re-export commonly used items
pub use adjustments::{compute_adjustments, compute_adjustments_with, format_signed_currency};
pub use engine::AdjustmentEngine;
pub use reconciliation::{reconcile, reconcile_comparables, round_half_up};
