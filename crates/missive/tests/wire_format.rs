//! Tests pinning the JSON wire format the Missive server expects.
//!
//! These tests serialize requests and parse canonical server payloads to
//! verify the shapes stay compatible with the deployed API.

use missive::{
    Account, Relationship, RelationshipAction, RelationshipRequest, RemoteError, ResponseEnvelope,
    User,
};
use serde_json::json;

#[test]
fn test_relationship_request_json_structure() {
    let request = RelationshipRequest {
        user_id: "773e5e77-4107-45c2-b648-8fc722ed77f5".into(),
        full_name: Some("Ada".into()),
        action: RelationshipAction::Add,
    };

    let json = serde_json::to_value(&request).unwrap();

    // Field names stay snake_case on the wire
    assert_eq!(json["user_id"], "773e5e77-4107-45c2-b648-8fc722ed77f5");
    assert!(json.get("userId").is_none()); // camelCase should NOT exist
    assert_eq!(json["full_name"], "Ada");
    assert_eq!(json["action"], "ADD"); // UPPERCASE enum value
}

#[test]
fn test_relationship_request_omits_absent_full_name() {
    let request = RelationshipRequest {
        user_id: "773e5e77-4107-45c2-b648-8fc722ed77f5".into(),
        full_name: None,
        action: RelationshipAction::Remove,
    };

    let json = serde_json::to_value(&request).unwrap();

    assert!(json.get("full_name").is_none()); // absent, not null
    assert_eq!(json["action"], "REMOVE");
}

#[test]
fn test_relationship_action_wire_values() {
    let cases = [
        (RelationshipAction::Add, "ADD"),
        (RelationshipAction::Remove, "REMOVE"),
        (RelationshipAction::Update, "UPDATE"),
        (RelationshipAction::Block, "BLOCK"),
        (RelationshipAction::Unblock, "UNBLOCK"),
    ];

    for (action, expected) in cases {
        assert_eq!(serde_json::to_value(action).unwrap(), json!(expected));
    }
}

#[test]
fn test_relationship_wire_values_parse() {
    let cases = [
        ("ME", Relationship::Me),
        ("FRIEND", Relationship::Friend),
        ("STRANGER", Relationship::Stranger),
        ("BLOCKING", Relationship::Blocking),
    ];

    for (wire, expected) in cases {
        let parsed: Relationship = serde_json::from_value(json!(wire)).unwrap();
        assert_eq!(parsed, expected);
    }
}

#[test]
fn test_canonical_user_payload_parses() {
    let body = json!({
        "data": {
            "user_id": "773e5e77-4107-45c2-b648-8fc722ed77f5",
            "identity_number": "10086",
            "full_name": "Ada",
            "biography": "early riser",
            "avatar_url": "https://cdn.missive.im/avatars/ada.png",
            "relationship": "STRANGER",
            "is_verified": true,
            "created_at": "2024-01-28T00:00:00Z"
        }
    });

    let envelope: ResponseEnvelope<User> = serde_json::from_value(body).unwrap();

    let user = envelope.data.unwrap();
    assert_eq!(user.relationship, Relationship::Stranger);
    assert!(user.is_verified);
    assert_eq!(user.biography, "early riser");
}

#[test]
fn test_canonical_account_payload_parses() {
    let body = json!({
        "data": {
            "user_id": "8dd7ba75-0b77-4461-9b72-b81c1b1ee096",
            "identity_number": "31911",
            "full_name": "Grace",
            "phone": "+15550100",
            "created_at": "2024-01-28T00:00:00Z"
        }
    });

    let envelope: ResponseEnvelope<Account> = serde_json::from_value(body).unwrap();

    let account = envelope.data.unwrap();
    assert_eq!(account.phone.as_deref(), Some("+15550100"));
    assert!(account.avatar_url.is_empty()); // absent optionals default
}

#[test]
fn test_canonical_error_payload_parses() {
    let error: RemoteError = serde_json::from_value(json!({
        "status": 202,
        "code": 20119,
        "description": "PIN incorrect"
    }))
    .unwrap();

    assert_eq!(error.status, 202);
    assert_eq!(error.code, 20119);
    assert_eq!(error.description, "PIN incorrect");
}

/// Print the actual JSON for manual inspection
#[test]
fn test_print_example_request() {
    let request = RelationshipRequest {
        user_id: "773e5e77-4107-45c2-b648-8fc722ed77f5".into(),
        full_name: Some("Ada".into()),
        action: RelationshipAction::Add,
    };

    let json = serde_json::to_string_pretty(&request).unwrap();
    println!("Example RelationshipRequest:\n{}", json);

    // This should match the server's expectation:
    // {
    //   "user_id": "773e5e77-4107-45c2-b648-8fc722ed77f5",
    //   "full_name": "Ada",
    //   "action": "ADD"
    // }
}
