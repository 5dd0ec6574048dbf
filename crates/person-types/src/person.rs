//! Person types

use serde::{Deserialize, Serialize};

/// A stored person. The `id` is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Request body for creating or renaming a person
///
/// Clients may echo back a full `Person`; any `id` in the body is ignored in
/// favour of the one assigned by storage or taken from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonPayload {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl PersonPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    /// True when the name is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ignores_id() {
        let payload: PersonPayload = serde_json::from_str(r#"{"id": 42, "name": "Ana"}"#).unwrap();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.id, Some(42));

        let payload: PersonPayload = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(payload.id, None);
    }

    #[test]
    fn test_payload_accepts_legacy_field() {
        let payload: PersonPayload = serde_json::from_str(r#"{"nome": "Bruno"}"#).unwrap();
        assert_eq!(payload.name, "Bruno");
    }

    #[test]
    fn test_payload_requires_name() {
        assert!(serde_json::from_str::<PersonPayload>(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_blank_names() {
        assert!(!PersonPayload::new("  Ana ").is_blank());
        assert!(PersonPayload::new("   ").is_blank());
        assert!(PersonPayload::new("").is_blank());
    }

    #[test]
    fn test_person_serializes_id_and_name() {
        let json = serde_json::to_value(Person::new(7, "Carla")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "name": "Carla"}));
    }
}
