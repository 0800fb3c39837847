//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod appraisal_store;

// Re-export service implementations
pub use appraisal_store::RealAppraisalStore;

#[cfg(test)]
mod tests;
