//! Shared error types for the appraisal system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid UUID: {input}")]
    InvalidUuid { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid appraisal status: {input}")]
    InvalidStatus { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
