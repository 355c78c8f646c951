//! The delivery seam. Message content and transport live behind [`Mailer`].

use crate::error::MailError;
use crate::request::Applicant;

pub trait Mailer {
    /// Welcome message to the applicant.
    fn send_welcome(&self, applicant: &Applicant) -> Result<(), MailError>;

    /// New-member notice to the club admin.
    fn notify_admin(&self, applicant: &Applicant) -> Result<(), MailError>;
}
