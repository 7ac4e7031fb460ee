use super::*;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_default_remembers_user() {
    let creds = Credentials::default();
    assert!(creds.username.is_none());
    assert!(creds.password.is_none());
    assert!(creds.remember_me);
}

#[test]
fn credentials_serialize_with_camel_case_keys() {
    let creds = Credentials {
        username: Some("admin".to_owned()),
        password: Some("admin".to_owned()),
        remember_me: true,
    };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "username": "admin", "password": "admin", "rememberMe": true })
    );
}

#[test]
fn credentials_clear_keeps_remember_me() {
    let mut creds = Credentials {
        username: Some("admin".to_owned()),
        password: Some("secret".to_owned()),
        remember_me: false,
    };
    creds.clear();
    assert_eq!(creds, Credentials { username: None, password: None, remember_me: false });
}

// =============================================================
// AuthEvent / DismissReason
// =============================================================

#[test]
fn success_event_carries_content() {
    let event = AuthEvent::authentication_success("authenticationSuccess");
    assert_eq!(event.name, "authenticationSuccess");
    assert_eq!(event.content, "Sending Authentication Success");
}

#[test]
fn dismiss_reasons_render_host_strings() {
    assert_eq!(DismissReason::LoginSuccess.as_str(), "login success");
    assert_eq!(DismissReason::Cancel.as_str(), "cancel");
    assert_eq!(DismissReason::ToRegister.as_str(), "to state register");
    assert_eq!(DismissReason::ToRequestReset.to_string(), "to state requestReset");
}
