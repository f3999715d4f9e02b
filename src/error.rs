//! Error types for u-roster.
//!
//! Scheduling itself never fails: infeasible input yields a best-effort,
//! possibly understaffed roster. Errors only arise from loading or
//! checking generator configuration.

use thiserror::Error;

/// Main error type.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for u-roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
