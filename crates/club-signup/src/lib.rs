//! # club-signup
//!
//! Handles the join-the-club form: checks the applicant's fields, maps the
//! major code to a label, and sends a welcome plus an admin notice through a
//! caller-supplied [`Mailer`].
//!
//! ## Modules
//!
//! - [`request`] — form payload and validated `Applicant`
//! - [`major`] — major code → label
//! - [`mailer`] — delivery trait
//! - [`signup`] — `process_signup` and its outcome rule
//! - [`error`] — Error types

pub mod error;
pub mod mailer;
pub mod major;
pub mod request;
pub mod signup;

pub use error::{MailError, SignupError};
pub use mailer::Mailer;
pub use major::Major;
pub use request::{Applicant, SignupRequest};
pub use signup::{process_signup, SignupOutcome};
