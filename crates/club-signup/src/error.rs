//! Error types for club-signup operations.

use thiserror::Error;

/// A failed send reported by a [`crate::Mailer`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MailError(pub String);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignupError {
    #[error("Invalid signup: {0}")]
    Invalid(String),

    /// Raised only when neither the applicant nor the admin could be reached.
    #[error("Failed to send emails (welcome: {welcome}; admin: {admin})")]
    Delivery { welcome: MailError, admin: MailError },
}

pub type Result<T> = std::result::Result<T, SignupError>;
