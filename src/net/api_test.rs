use super::*;
use crate::net::types::{ApiError, ErrorBody};

#[test]
fn register_endpoint_path() {
    assert_eq!(REGISTER_ENDPOINT, "/auth/register");
}

#[test]
fn registration_failed_message_formats_status() {
    assert_eq!(registration_failed_message(400), "registration failed: 400");
}

#[test]
fn rejection_surfaces_server_detail_verbatim() {
    let body = ErrorBody {
        detail: Some("username taken".to_owned()),
    };
    assert_eq!(
        rejection(400, Some(body)),
        ApiError::Rejected {
            status: 400,
            detail: "username taken".to_owned(),
        }
    );
}

#[test]
fn rejection_without_body_falls_back_to_status_message() {
    assert_eq!(
        rejection(502, None),
        ApiError::Rejected {
            status: 502,
            detail: "registration failed: 502".to_owned(),
        }
    );
}

#[test]
fn rejection_without_detail_field_falls_back_to_status_message() {
    assert_eq!(
        rejection(400, Some(ErrorBody::default())),
        ApiError::Rejected {
            status: 400,
            detail: "registration failed: 400".to_owned(),
        }
    );
}
