//! Service tests for webserver
//!
//! This module contains tests for the webserver services.

pub mod fixtures;
pub mod helpers;
