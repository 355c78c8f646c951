//! Processing a join request.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{Result, SignupError};
use crate::mailer::Mailer;
use crate::request::{Applicant, SignupRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupOutcome {
    pub applicant: Applicant,
    pub welcome_sent: bool,
    pub admin_notified: bool,
}

/// Validate `request`, then send the welcome and the admin notice.
///
/// Both sends are always attempted. A single failed send is logged and
/// reported in the outcome; the signup fails only when both fail.
pub fn process_signup<M: Mailer + ?Sized>(
    mailer: &M,
    request: SignupRequest,
) -> Result<SignupOutcome> {
    let applicant = request.validate()?;

    let welcome = mailer.send_welcome(&applicant);
    if let Err(err) = &welcome {
        warn!(email = %applicant.email, error = %err, "welcome email failed");
    }

    let admin = mailer.notify_admin(&applicant);
    if let Err(err) = &admin {
        warn!(email = %applicant.email, error = %err, "admin notification failed");
    }

    match (welcome, admin) {
        (Err(welcome), Err(admin)) => {
            error!(email = %applicant.email, "signup could not be delivered");
            Err(SignupError::Delivery { welcome, admin })
        }
        (welcome, admin) => {
            info!(email = %applicant.email, major = %applicant.major, "signup accepted");
            Ok(SignupOutcome {
                applicant,
                welcome_sent: welcome.is_ok(),
                admin_notified: admin.is_ok(),
            })
        }
    }
}
