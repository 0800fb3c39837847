//! Web layer: axum handlers over the service traits

pub mod extract;
pub mod handlers;
