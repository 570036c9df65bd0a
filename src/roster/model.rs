use crate::error::{Result, RosterError};
use serde::{Deserialize, Deserializer, Serialize};

pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 150;

/// A student record as exchanged with the backend.
///
/// `id` is assigned by the server on create. It is absent on the create path
/// and present, immutable, thereafter. The canonical representation is a
/// string; backends that serve numeric ids are normalized on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_id"
    )]
    pub id: Option<String>,
    pub name: String,
    pub age: u32,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            age,
        }
    }
}

// Some backends serve ids as JSON numbers, others as strings. Everything
// past this boundary works with strings only.
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

/// Raw form field values, exactly as the input surface provides them.
///
/// Coercion (trimming, integer parsing of age) happens here, not at the
/// surface, so every client gets identical validation behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub id: String,
    pub name: String,
    pub age: String,
}

impl FormValues {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
        }
    }

    /// Validates the raw values and coerces them into a [`Student`].
    ///
    /// The name must be non-empty after trimming and the age must parse to an
    /// integer within `[AGE_MIN, AGE_MAX]`. The id, if present, is passed
    /// through unmodified.
    pub fn validate(&self) -> Result<Student> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RosterError::Validation(
                "Please enter student name".to_string(),
            ));
        }

        let age: u32 = self.age.trim().parse().map_err(|_| {
            RosterError::Validation(format!(
                "Please enter a valid age ({}-{})",
                AGE_MIN, AGE_MAX
            ))
        })?;
        if !(AGE_MIN..=AGE_MAX).contains(&age) {
            return Err(RosterError::Validation(format!(
                "Please enter a valid age ({}-{})",
                AGE_MIN, AGE_MAX
            )));
        }

        let id = self.id.trim();
        Ok(Student {
            id: if id.is_empty() {
                None
            } else {
                Some(id.to_string())
            },
            name: name.to_string(),
            age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_boundary_ages() {
        for age in ["1", "150"] {
            let values = FormValues::new("", "Ann", age);
            assert!(values.validate().is_ok(), "age {} should pass", age);
        }
    }

    #[test]
    fn validate_rejects_out_of_range_ages() {
        for age in ["0", "151"] {
            let values = FormValues::new("", "Ann", age);
            match values.validate() {
                Err(RosterError::Validation(msg)) => assert!(msg.contains("valid age")),
                other => panic!("age {} should fail validation, got {:?}", age, other),
            }
        }
    }

    #[test]
    fn validate_rejects_non_numeric_age() {
        let values = FormValues::new("", "Ann", "twenty");
        assert!(matches!(
            values.validate(),
            Err(RosterError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let values = FormValues::new("", "   ", "20");
        match values.validate() {
            Err(RosterError::Validation(msg)) => assert!(msg.contains("name")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn validate_trims_name_and_passes_id_through() {
        let values = FormValues::new(" 7 ", "  Ann  ", "20");
        let student = values.validate().unwrap();
        assert_eq!(student.id.as_deref(), Some("7"));
        assert_eq!(student.name, "Ann");
        assert_eq!(student.age, 20);
    }

    #[test]
    fn validate_omits_empty_id() {
        let student = FormValues::new("", "Ann", "20").validate().unwrap();
        assert_eq!(student.id, None);
    }

    #[test]
    fn serialize_skips_absent_id() {
        let json = serde_json::to_string(&Student::new("Ann", 20)).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn deserialize_accepts_string_id() {
        let student: Student = serde_json::from_str(r#"{"id":"5","name":"Cy","age":22}"#).unwrap();
        assert_eq!(student.id.as_deref(), Some("5"));
    }

    #[test]
    fn deserialize_normalizes_numeric_id() {
        let student: Student = serde_json::from_str(r#"{"id":5,"name":"Cy","age":22}"#).unwrap();
        assert_eq!(student.id.as_deref(), Some("5"));
    }

    #[test]
    fn deserialize_tolerates_missing_id() {
        let student: Student = serde_json::from_str(r#"{"name":"Cy","age":22}"#).unwrap();
        assert_eq!(student.id, None);
    }
}
