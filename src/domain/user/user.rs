//! Student account.

use serde::{Deserialize, Serialize};

use crate::domain::cognitive::CognitiveProfile;
use crate::domain::foundation::{Percentage, Timestamp, UserId, ValidationError};

use super::ProfileUpdate;

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Requires all three fields to be present and non-blank.
    ///
    /// Email is trimmed and lowercased so lookups are case-insensitive.
    /// The password is kept verbatim.
    pub fn parse(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name)?;
        let email = normalize_email(required("email", email)?);
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ValidationError::empty_field("password"))?;

        Ok(Self {
            name,
            email,
            password: password.to_string(),
        })
    }
}

/// Canonical form of an email address used for storage and lookup.
pub fn normalize_email(email: impl AsRef<str>) -> String {
    email.as_ref().trim().to_lowercase()
}

fn required(field: &str, value: Option<&str>) -> Result<String, ValidationError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ValidationError::empty_field(field))
}

/// Scores cached on the user by an earlier model-backed analysis.
///
/// Read by the dashboard, never recomputed by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCache {
    #[serde(default)]
    pub cpi: Option<Percentage>,
    #[serde(default)]
    pub emotional_stability_score: Option<Percentage>,
    #[serde(default)]
    pub cognitive_alignment: Option<String>,
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub department: Option<String>,
    pub year: Option<String>,
    pub college: Option<String>,
    pub phone: Option<String>,
    pub enrollment_number: Option<String>,
    pub dob: Option<String>,
    pub learning_styles: Vec<String>,
    pub subjects: Vec<String>,
    pub cognitive_profile: Option<CognitiveProfile>,
    pub dashboard_cache: Option<DashboardCache>,
    pub created_at: Timestamp,
}

impl User {
    /// Creates a user from a validated registration and an already-hashed password.
    pub fn new(registration: Registration, password_hash: String) -> Self {
        Self {
            id: UserId::new(),
            name: registration.name,
            email: registration.email,
            password_hash,
            department: None,
            year: None,
            college: None,
            phone: None,
            enrollment_number: None,
            dob: None,
            learning_styles: Vec::new(),
            subjects: Vec::new(),
            cognitive_profile: None,
            dashboard_cache: None,
            created_at: Timestamp::now(),
        }
    }

    /// Applies the fields present in a profile update.
    pub fn apply_profile_update(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(department) = update.department {
            self.department = Some(department);
        }
        if let Some(year) = update.year {
            self.year = Some(year);
        }
        if let Some(learning_styles) = update.learning_styles {
            self.learning_styles = learning_styles;
        }
        if let Some(subjects) = update.subjects {
            self.subjects = subjects;
        }
        if let Some(college) = update.college {
            self.college = Some(college);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(enrollment_number) = update.enrollment_number {
            self.enrollment_number = Some(enrollment_number);
        }
        if let Some(dob) = update.dob {
            self.dob = Some(dob);
        }
    }

    /// Replaces the cached cognitive profile wholesale.
    pub fn set_cognitive_profile(&mut self, profile: CognitiveProfile) {
        self.cognitive_profile = Some(profile);
    }
}
