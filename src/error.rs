//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;
use crate::models::AppointmentStatus;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Excel export error
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Appointment status change not allowed from the current state
    #[error("Cannot {action} an appointment that is {from}")]
    InvalidTransition {
        action: &'static str,
        from: AppointmentStatus,
    },
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;
