//! Decoding user records in the shapes the realtime database stores them.

use connie_core::{ActorRole, UserProfile};

#[test]
fn decodes_mobile_client_record() {
    let json = r#"{"email": "tom@example.com", "fullname": "Tom Ochoa", "accountType": 1}"#;
    let user: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(user.display_name, "Tom Ochoa");
    assert_eq!(user.email, "tom@example.com");
    assert_eq!(user.role, ActorRole::Driver);
    assert!(user.id.is_empty());
}

#[test]
fn decodes_named_role() {
    let json = r#"{"id": "u1", "displayName": "Ana", "role": "passenger"}"#;
    let user: UserProfile = serde_json::from_str(json).unwrap();

    assert_eq!(user, UserProfile::new("u1", "Ana", ActorRole::Passenger));
}

#[test]
fn rejects_unknown_account_type() {
    let json = r#"{"fullname": "Ana", "accountType": 9}"#;
    assert!(serde_json::from_str::<UserProfile>(json).is_err());
}

#[test]
fn serialized_profile_decodes_back() {
    let user = UserProfile::new("u2", "Bea", ActorRole::Driver);
    let json = serde_json::to_string(&user).unwrap();

    assert!(json.contains(r#""role":"driver""#));
    assert_eq!(serde_json::from_str::<UserProfile>(&json).unwrap(), user);
}

#[test]
fn account_codes_decode_to_same_role() {
    for role in ActorRole::ALL {
        let json = format!(r#"{{"fullname": "Sam", "accountType": {}}}"#, role.account_code());
        let user: UserProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(user.role, role);
    }
}
