//! The join form payload and the validated applicant built from it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignupError};
use crate::major::Major;

/// Form fields as posted by the join page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Form code such as `"cs"`.
    #[serde(default)]
    pub major: Option<String>,
}

/// A signup that passed validation, with its major resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applicant {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub major: Major,
}

impl SignupRequest {
    /// Trim fields and check that a name and a plausible email are present.
    pub fn validate(self) -> Result<Applicant> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(SignupError::Invalid("name is required".to_string()));
        }

        let email = self.email.trim().to_string();
        let plausible = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !plausible {
            return Err(SignupError::Invalid(format!("invalid email '{}'", email)));
        }

        let phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Applicant {
            name,
            email,
            phone,
            major: Major::from_code(self.major.as_deref()),
        })
    }
}
