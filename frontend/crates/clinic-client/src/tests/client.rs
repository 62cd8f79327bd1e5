use crate::{Client, ClientError};

use clinic_core::DirectoryKind;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3000/api/");
    assert_eq!(client.base_url, "http://localhost:3000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3000/api");
    assert_eq!(client.base_url, "http://localhost:3000/api");
}

#[test]
fn test_staff_search_url_carries_role_and_encoded_query() {
    let client = Client::new("http://localhost:3000/api");

    let url = client
        .search_url_for_test(DirectoryKind::StaffNurse, "ann marie")
        .unwrap();

    assert_eq!(url.path(), "/api/staff/search");
    assert_eq!(url.query(), Some("role=nurse&q=ann+marie"));
}

#[test]
fn test_user_search_url_has_no_role() {
    let client = Client::new("http://localhost:3000/api");

    let url = client.search_url_for_test(DirectoryKind::User, "jo").unwrap();

    assert_eq!(url.path(), "/api/users/search");
    assert_eq!(url.query(), Some("q=jo"));
}

#[test]
fn test_unauthorized_status_maps_to_auth_error() {
    let err = Client::error_for_test(401, r#"{"message":"Invalid credentials"}"#);

    assert!(err.is_auth_error());
    assert!(err.to_string().contains("Invalid credentials"));
}

#[test]
fn test_forbidden_status_maps_to_auth_error() {
    let err = Client::error_for_test(403, "");

    assert!(matches!(err, ClientError::Unauthorized { status: 403, .. }));
}

#[test]
fn test_server_error_keeps_code_and_message() {
    let err = Client::error_for_test(
        500,
        r#"{"error":{"code":"DIRECTORY_DOWN","message":"Directory unavailable"}}"#,
    );

    assert!(!err.is_auth_error());
    match err {
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(code, "DIRECTORY_DOWN");
            assert_eq!(message, "Directory unavailable");
        }
        other => panic!("Expected Api variant, got {other:?}"),
    }
}

#[test]
fn test_non_json_error_body_falls_back_to_reason_phrase() {
    let err = Client::error_for_test(502, "<html>bad gateway</html>");

    assert!(err.to_string().contains("Bad Gateway"));
    assert!(err.to_string().contains("UNKNOWN"));
}
