//! Error types for the invitation engines.

use thiserror::Error;

/// Errors that can occur while loading or using an invitation.
///
/// The countdown and message formatters are total, so these only come from
/// configuration validation and from parsing user-supplied choices.
#[derive(Error, Debug)]
pub enum UndanganError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid contact phone '{0}': expected country code followed by digits")]
    InvalidPhone(String),

    #[error("Event duration must be between 1 and 168 hours, got {0}")]
    InvalidDuration(u32),

    #[error("Unknown attendance status '{0}' (expected hadir or tidak-hadir)")]
    UnknownAttendance(String),

    #[error("Unknown food preference '{0}' (expected none, vegetarian or nut-allergy)")]
    UnknownFoodPreference(String),

    #[error("Unknown gift request '{0}' (expected bank or ewallet)")]
    UnknownGiftRequest(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),
}

/// Result type alias for invitation operations.
pub type UndanganResult<T> = Result<T, UndanganError>;
