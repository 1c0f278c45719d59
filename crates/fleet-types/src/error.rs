//! Error types for fleet-checker

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Insufficient fuel: {0}")]
    InsufficientFuel(String),

    #[error("Overload: {0}")]
    Overload(String),

    #[error("Unknown vehicle kind: {0}")]
    UnknownVehicleKind(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FleetError>;

impl FleetError {
    /// Shorthand for the most common variant.
    pub fn invalid(msg: impl Into<String>) -> Self {
        FleetError::InvalidOperation(msg.into())
    }
}
