use super::*;

#[test]
fn rejected_formats_status() {
    assert_eq!(
        AuthError::Rejected { status: 401 }.to_string(),
        "authentication rejected: 401"
    );
}

#[test]
fn network_formats_message() {
    assert_eq!(
        AuthError::Network("connection reset".to_owned()).to_string(),
        "network error: connection reset"
    );
}

#[test]
fn unavailable_mentions_server() {
    assert_eq!(AuthError::Unavailable.to_string(), "not available on server");
}
