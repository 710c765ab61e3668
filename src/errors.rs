//! Error types for the tablo workflow engine
//!
//! Each error type has a stable code for programmatic handling, an HTTP-like
//! status, and a Hungarian message shown to guest users.

use thiserror::Error;

/// Result type alias for tablo workflow operations
pub type Result<T> = std::result::Result<T, TabloError>;

/// Reason a finalize or navigation attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidStateReason {
    /// No photo has been claimed yet
    NoClaimedPhotos,
    /// No tablo photo has been picked
    NoTabloPhoto,
    /// The tablo pick is not among the retouch photos
    TabloNotInRetouch,
    /// The tablo pick is not among the claimed photos
    TabloNotInClaimed,
    /// A modification was requested on a workflow that is not finalized
    NotFinalized,
    /// Forward navigation into the completed step; finalize must be used
    FinalizeRequired,
    /// Backward navigation from the first step
    NoPreviousStep,
}

impl InvalidStateReason {
    /// Stable reason code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            InvalidStateReason::NoClaimedPhotos => "no_claimed_photos",
            InvalidStateReason::NoTabloPhoto => "no_tablo_photo",
            InvalidStateReason::TabloNotInRetouch => "tablo_not_in_retouch",
            InvalidStateReason::TabloNotInClaimed => "tablo_not_in_claimed",
            InvalidStateReason::NotFinalized => "not_finalized",
            InvalidStateReason::FinalizeRequired => "finalize_required",
            InvalidStateReason::NoPreviousStep => "no_previous_step",
        }
    }

    /// Hungarian message for the guest user
    pub fn user_message(&self) -> &'static str {
        match self {
            InvalidStateReason::NoClaimedPhotos => {
                "Legalább egy képet ki kell választanod, amelyen szerepelsz."
            }
            InvalidStateReason::NoTabloPhoto => "Válaszd ki a tablóra kerülő képet.",
            InvalidStateReason::TabloNotInRetouch => {
                "A tablókép csak a retusálásra kiválasztott képek közül lehet."
            }
            InvalidStateReason::TabloNotInClaimed => {
                "A tablókép csak a saját képeid közül lehet."
            }
            InvalidStateReason::NotFinalized => "A kiválasztás még nincs véglegesítve.",
            InvalidStateReason::FinalizeRequired => {
                "A befejezéshez véglegesítsd a kiválasztást."
            }
            InvalidStateReason::NoPreviousStep => "Ez az első lépés, nincs előző lépés.",
        }
    }
}

impl std::fmt::Display for InvalidStateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Main error type for all tablo workflow operations
#[derive(Debug, Error)]
pub enum TabloError {
    /// No progress record exists for the (user, gallery) pair
    #[error("Workflow state not found: {0}")]
    NotFound(String),

    /// Mutation attempted on a finalized or completed workflow
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Payload violates a selection invariant
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Preconditions of a transition are unmet
    #[error("Invalid state ({reason}): {message}")]
    InvalidState {
        reason: InvalidStateReason,
        message: String,
    },

    /// The stored record changed since it was loaded
    #[error("Concurrent modification: {0}")]
    Conflict(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl TabloError {
    /// Build an `InvalidState` error with the reason's default message
    pub fn invalid_state(reason: InvalidStateReason) -> Self {
        TabloError::InvalidState {
            reason,
            message: reason.user_message().to_string(),
        }
    }

    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            TabloError::NotFound(_) => "NOT_FOUND",
            TabloError::Forbidden(_) => "FORBIDDEN",
            TabloError::Validation(_) => "VALIDATION_ERROR",
            TabloError::InvalidState { .. } => "INVALID_STATE",
            TabloError::Conflict(_) => "CONFLICT",
            TabloError::InvalidJson(_) => "INVALID_JSON",
            TabloError::FileNotFound(_) => "FILE_NOT_FOUND",
            TabloError::ConfigError(_) => "CONFIG_ERROR",
            TabloError::Io(_) => "IO_ERROR",
            TabloError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// HTTP-like status code surfaced in action responses
    pub fn status(&self) -> u16 {
        match self {
            TabloError::NotFound(_) => 404,
            TabloError::Forbidden(_) => 403,
            TabloError::Validation(_) => 422,
            TabloError::InvalidState { .. } | TabloError::Conflict(_) => 409,
            _ => 500,
        }
    }

    /// Hungarian message for the guest user.
    ///
    /// Domain errors carry their own message; plumbing errors collapse into a
    /// generic one so file paths never reach the client.
    pub fn user_message(&self) -> String {
        match self {
            TabloError::NotFound(_) => "Nem található folyamatban lévő kiválasztás.".to_string(),
            TabloError::Forbidden(_) => {
                "A kiválasztás véglegesítve van, nem módosítható.".to_string()
            }
            TabloError::Validation(msg) => msg.clone(),
            TabloError::InvalidState { message, .. } => message.clone(),
            TabloError::Conflict(_) => {
                "A kiválasztás időközben megváltozott. Frissítsd az oldalt és próbáld újra."
                    .to_string()
            }
            _ => "Váratlan hiba történt. Kérjük, próbáld újra később.".to_string(),
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        TabloError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &TabloError) -> i32 {
    match error {
        TabloError::ConfigError(_) => 78, // EX_CONFIG
        _ => 1,
    }
}
