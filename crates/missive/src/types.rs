//! API data types and wire formats.

use serde::{Deserialize, Serialize};

/// Standard response envelope returned by every endpoint.
///
/// The server replies `200 OK` even for application-level rejections and
/// signals the outcome through the `data` / `error` pair instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub data: Option<T>,
    pub error: Option<RemoteError>,
}

/// Error object carried inside a response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteError {
    pub status: i64,
    pub code: i64,
    #[serde(default)]
    pub description: String,
}

/// The authenticated user's own account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub user_id: String,
    pub identity_number: String,
    pub full_name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: String,
}

/// Another user's profile, as visible to the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub user_id: String,
    pub identity_number: String,
    pub full_name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub avatar_url: String,
    pub relationship: Relationship,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: String,
}

/// How the caller relates to another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Relationship {
    Me,
    Friend,
    Stranger,
    Blocking,
}

/// Relationship change submitted to the server.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipRequest {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub action: RelationshipAction,
}

/// Supported relationship changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationshipAction {
    Add,
    Remove,
    Update,
    Block,
    Unblock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_action_uppercase() {
        let request = RelationshipRequest {
            user_id: "773e5e77-4107-45c2-b648-8fc722ed77f5".into(),
            full_name: None,
            action: RelationshipAction::Add,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["action"], "ADD"); // UPPERCASE, not camelCase
        assert_eq!(json["user_id"], "773e5e77-4107-45c2-b648-8fc722ed77f5");
    }

    #[test]
    fn test_full_name_omitted_when_none() {
        let request = RelationshipRequest {
            user_id: "773e5e77-4107-45c2-b648-8fc722ed77f5".into(),
            full_name: None,
            action: RelationshipAction::Block,
        };

        let json_str = serde_json::to_string(&request).unwrap();

        assert!(!json_str.contains("full_name"));
    }

    #[test]
    fn test_full_name_sent_when_set() {
        let request = RelationshipRequest {
            user_id: "773e5e77-4107-45c2-b648-8fc722ed77f5".into(),
            full_name: Some("Ada".into()),
            action: RelationshipAction::Update,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["full_name"], "Ada");
        assert_eq!(json["action"], "UPDATE");
    }

    #[test]
    fn test_envelope_with_data() {
        let body = r#"{
            "data": {
                "user_id": "773e5e77-4107-45c2-b648-8fc722ed77f5",
                "identity_number": "10086",
                "full_name": "Ada",
                "relationship": "FRIEND",
                "created_at": "2024-01-28T00:00:00Z"
            }
        }"#;

        let envelope: ResponseEnvelope<User> = serde_json::from_str(body).unwrap();

        let user = envelope.data.unwrap();
        assert_eq!(user.relationship, Relationship::Friend);
        assert_eq!(user.identity_number, "10086");
        assert!(user.biography.is_empty()); // absent fields default
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_envelope_with_error() {
        let body = r#"{
            "error": {"status": 202, "code": 20117, "description": "Insufficient balance"}
        }"#;

        let envelope: ResponseEnvelope<User> = serde_json::from_str(body).unwrap();

        assert!(envelope.data.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.status, 202);
        assert_eq!(error.code, 20117);
        assert_eq!(error.description, "Insufficient balance");
    }

    #[test]
    fn test_envelope_with_neither_side() {
        let envelope: ResponseEnvelope<User> = serde_json::from_str("{}").unwrap();

        assert!(envelope.data.is_none());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_error_description_defaults_to_empty() {
        let body = r#"{"error": {"status": 500, "code": 500}}"#;

        let envelope: ResponseEnvelope<Account> = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.error.unwrap().description, "");
    }

    #[test]
    fn test_account_optional_phone() {
        let body = r#"{
            "data": {
                "user_id": "8dd7ba75-0b77-4461-9b72-b81c1b1ee096",
                "identity_number": "31911",
                "full_name": "Grace",
                "phone": "+15550100",
                "created_at": "2024-01-28T00:00:00Z"
            }
        }"#;

        let envelope: ResponseEnvelope<Account> = serde_json::from_str(body).unwrap();

        let account = envelope.data.unwrap();
        assert_eq!(account.phone.as_deref(), Some("+15550100"));
    }
}
