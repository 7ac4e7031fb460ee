use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_routes_match_server() {
    let config = LoginConfig::default();
    assert_eq!(config.register_route, vec!["/register"]);
    assert_eq!(config.reset_request_route, vec!["/reset", "request"]);
    assert_eq!(config.home_route, vec![""]);
}

#[test]
fn default_endpoint_and_key() {
    let config = LoginConfig::default();
    assert_eq!(config.auth_endpoint, "/api/authentication");
    assert_eq!(config.redirect_storage_key, "previousUrl");
    assert_eq!(config.success_event, "authenticationSuccess");
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(LoginConfig::from_json("{}").unwrap(), LoginConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = LoginConfig::from_json(r#"{"authEndpoint":"/auth/login","unknown":1}"#).unwrap();
    assert_eq!(config.auth_endpoint, "/auth/login");
    assert_eq!(config.redirect_storage_key, "previousUrl");
}

#[test]
fn malformed_json_is_an_error() {
    assert!(LoginConfig::from_json("[1, 2").is_err());
}

#[test]
fn route_segments_borrows_in_order() {
    let route = vec!["/reset".to_owned(), "request".to_owned()];
    assert_eq!(route_segments(&route), vec!["/reset", "request"]);
}
