//! Profile update validation.
//!
//! Only a fixed set of keys is editable. Each key has its own validator:
//! text fields must be strings, `year` may be a string or an integer, and
//! `learning_styles` / `subjects` must be arrays of strings. All accepted
//! strings are trimmed. Keys outside the editable set are ignored.

use serde_json::{Map, Value};

use crate::domain::foundation::ValidationError;

/// A validated, partial profile change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub learning_styles: Option<Vec<String>>,
    pub subjects: Option<Vec<String>>,
    pub college: Option<String>,
    pub phone: Option<String>,
    pub enrollment_number: Option<String>,
    pub dob: Option<String>,
}

impl ProfileUpdate {
    /// Validates a JSON request body.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let empty = Map::new();
        let fields = match body {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => return Err(ValidationError::invalid_format("body", "must be a JSON object")),
        };

        let name = text(fields, "name")?;
        if matches!(name.as_deref(), Some("")) {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            name,
            department: text(fields, "department")?,
            year: year(fields)?,
            learning_styles: string_list(fields, "learning_styles")?,
            subjects: string_list(fields, "subjects")?,
            college: text(fields, "college")?,
            phone: text(fields, "phone")?,
            enrollment_number: text(fields, "enrollment_number")?,
            dob: text(fields, "dob")?,
        })
    }

    /// True when no editable key was supplied.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn text(fields: &Map<String, Value>, key: &str) -> Result<Option<String>, ValidationError> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(_) => Err(ValidationError::invalid_format(key, format!("{} must be a string", key))),
    }
}

fn year(fields: &Map<String, Value>) -> Result<Option<String>, ValidationError> {
    match fields.get("year") {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        Some(_) => Err(ValidationError::invalid_format(
            "year",
            "year must be a string or an integer",
        )),
    }
}

fn string_list(
    fields: &Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<String>>, ValidationError> {
    let not_a_list = || ValidationError::invalid_format(key, format!("{} must be a list", key));

    match fields.get(key) {
        None => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.trim().to_string()),
                _ => Err(not_a_list()),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(not_a_list()),
    }
}
