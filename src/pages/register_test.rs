use super::*;
use crate::net::types::ApiError;

#[test]
fn success_message_contains_echoed_username() {
    assert_eq!(success_message("alice"), "Successfully registered: alice");
}

#[test]
fn failure_message_contains_server_detail() {
    let error = ApiError::Rejected {
        status: 400,
        detail: "username taken".to_owned(),
    };
    assert_eq!(failure_message(&error), "Failed to register: username taken");
}

#[test]
fn failure_message_covers_transport_failures() {
    let error = ApiError::Network("connection refused".to_owned());
    assert_eq!(
        failure_message(&error),
        "Failed to register: network error: connection refused"
    );
}
