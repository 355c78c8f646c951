//! Tests for join-form processing against a recording mailer.

use std::cell::RefCell;

use club_signup::{
    process_signup, Applicant, MailError, Mailer, Major, SignupError, SignupRequest,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingMailer {
    fail_welcome: bool,
    fail_admin: bool,
    sent: RefCell<Vec<String>>,
}

impl Mailer for RecordingMailer {
    fn send_welcome(&self, applicant: &Applicant) -> Result<(), MailError> {
        self.sent.borrow_mut().push(format!("welcome:{}", applicant.email));
        if self.fail_welcome {
            return Err(MailError("mailbox unavailable".to_string()));
        }
        Ok(())
    }

    fn notify_admin(&self, applicant: &Applicant) -> Result<(), MailError> {
        self.sent
            .borrow_mut()
            .push(format!("admin:{}:{}", applicant.name, applicant.major));
        if self.fail_admin {
            return Err(MailError("quota exceeded".to_string()));
        }
        Ok(())
    }
}

fn ada() -> SignupRequest {
    SignupRequest {
        name: "Ada".to_string(),
        email: "ada@example.edu".to_string(),
        phone: Some("316-555-0100".to_string()),
        major: Some("cs".to_string()),
    }
}

// ── Outcome rule ────────────────────────────────────────────────────────────

#[test]
fn both_sends_succeed() {
    let mailer = RecordingMailer::default();
    let outcome = process_signup(&mailer, ada()).unwrap();

    assert!(outcome.welcome_sent);
    assert!(outcome.admin_notified);
    assert_eq!(outcome.applicant.major, Major::ComputerScience);
    assert_eq!(
        *mailer.sent.borrow(),
        ["welcome:ada@example.edu", "admin:Ada:Computer Science"]
    );
}

#[test]
fn failed_welcome_still_notifies_admin() {
    let mailer = RecordingMailer {
        fail_welcome: true,
        ..RecordingMailer::default()
    };
    let outcome = process_signup(&mailer, ada()).unwrap();

    assert!(!outcome.welcome_sent);
    assert!(outcome.admin_notified);
    assert_eq!(mailer.sent.borrow().len(), 2);
}

#[test]
fn failed_admin_notice_alone_is_not_an_error() {
    let mailer = RecordingMailer {
        fail_admin: true,
        ..RecordingMailer::default()
    };
    let outcome = process_signup(&mailer, ada()).unwrap();

    assert!(outcome.welcome_sent);
    assert!(!outcome.admin_notified);
}

#[test]
fn both_sends_failing_is_an_error() {
    let mailer = RecordingMailer {
        fail_welcome: true,
        fail_admin: true,
        ..RecordingMailer::default()
    };
    let err = process_signup(&mailer, ada()).unwrap_err();

    assert_eq!(
        err,
        SignupError::Delivery {
            welcome: MailError("mailbox unavailable".to_string()),
            admin: MailError("quota exceeded".to_string()),
        }
    );
    assert!(err.to_string().starts_with("Failed to send emails"));
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn invalid_request_sends_nothing() {
    let mailer = RecordingMailer::default();
    let request = SignupRequest {
        email: "not-an-email".to_string(),
        ..ada()
    };

    assert!(matches!(
        process_signup(&mailer, request),
        Err(SignupError::Invalid(_))
    ));
    assert!(mailer.sent.borrow().is_empty());
}

#[test]
fn form_json_with_unknown_major() {
    let json = r#"{"name":"Grace","email":"grace@example.edu","major":"law"}"#;
    let request: SignupRequest = serde_json::from_str(json).unwrap();

    let mailer = RecordingMailer::default();
    let outcome = process_signup(&mailer, request).unwrap();
    assert_eq!(outcome.applicant.major.label(), "Not specified");
    assert_eq!(outcome.applicant.phone, None);

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["welcomeSent"], true);
    assert_eq!(value["adminNotified"], true);
}
