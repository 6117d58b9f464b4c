//! Core error types for bunkguard-core.
//!
//! This module defines the error hierarchy using thiserror. Most engine
//! operations never fail; errors come from storage, configuration, and
//! subject records that violate the counter contract.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bunkguard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Subject store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Subject-store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the subject document
    #[error("Failed to load subjects from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write the subject document
    #[error("Failed to save subjects to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// No subject with the given id or name
    #[error("Subject not found: {0}")]
    SubjectNotFound(String),

    /// No event with the given id on the addressed subject
    #[error("Event not found: {0}")]
    EventNotFound(String),

    /// IO errors while resolving or creating the data directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Subject counters or target outside the supported contract
    #[error("Invalid subject state: {0}")]
    InvalidSubjectState(String),

    /// Invalid value for a single field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
