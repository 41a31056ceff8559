//! Profile response body.

use serde::Serialize;
use serde_json::Value;

use crate::domain::user::User;

/// The serialized student. `cognitive_profile` is `{}` until analyzed.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub year: Option<String>,
    pub learning_styles: Vec<String>,
    pub subjects: Vec<String>,
    pub college: Option<String>,
    pub phone: Option<String>,
    pub enrollment_number: Option<String>,
    pub dob: Option<String>,
    pub cognitive_profile: Value,
    pub created_at: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        let cognitive_profile = user
            .cognitive_profile
            .as_ref()
            .and_then(|profile| serde_json::to_value(profile).ok())
            .unwrap_or_else(|| Value::Object(Default::default()));

        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            department: user.department,
            year: user.year,
            learning_styles: user.learning_styles,
            subjects: user.subjects,
            college: user.college,
            phone: user.phone,
            enrollment_number: user.enrollment_number,
            dob: user.dob,
            cognitive_profile,
            created_at: user.created_at.to_string(),
        }
    }
}
