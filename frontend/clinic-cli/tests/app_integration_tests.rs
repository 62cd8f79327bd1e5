//! End-to-end tests for the clinic CLI wiring against a wiremock API

use clinic_cli::{App, GateTarget, SearchTarget};
use clinic_config::Config;

use googletest::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn app_for(server: &MockServer, dir: &TempDir) -> App {
    App::new(
        &Config::default(),
        &server.uri(),
        dir.path().join("storage.json"),
    )
}

async fn mount_login(server: &MockServer, role: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"accessToken": "token-abc"})),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "email": "staff@clinic.test",
            "displayName": "Sam Staff",
            "role": role
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_valid_login_when_new_process_starts_then_whoami_restores_identity() {
    // Given
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_login(&server, "doctor").await;

    let first = app_for(&server, &dir);
    let login = first.login("doc1", "s3cret").await;
    assert_that!(login, ok(anything()));
    let login = login.unwrap();
    assert_eq!(login["navigate"], "/dashboard");
    assert_eq!(login["session"]["state"], "authenticated");

    // When
    let second = app_for(&server, &dir);
    let whoami = second.whoami().await;

    // Then
    assert_eq!(whoami["state"], "authenticated");
    assert_eq!(whoami["identity"]["role"], "doctor");
}

#[tokio::test]
async fn given_wrong_password_when_login_then_error_and_nothing_stored() {
    // Given
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;
    let app = app_for(&server, &dir);

    // When
    let result = app.login("doc1", "wrong").await;

    // Then
    assert_that!(result, err(anything()));
    assert!(app.session().credential().is_none());
    assert_eq!(app.whoami().await["state"], "unauthenticated");
}

#[tokio::test]
async fn given_nurse_when_admin_gate_checked_then_redirected_to_dashboard() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_login(&server, "nurse").await;
    let app = app_for(&server, &dir);
    app.login("nurse1", "s3cret").await.unwrap();

    let admin = app.gate(GateTarget::Admin).await;
    let any = app.gate(GateTarget::Any).await;

    assert_eq!(admin["decision"], "redirect");
    assert_eq!(admin["redirect"], "/dashboard");
    assert_eq!(any["decision"], "render");
}

#[tokio::test]
async fn given_no_session_when_gate_checked_then_redirected_to_entry() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let app = app_for(&server, &dir);

    let decision = app.gate(GateTarget::Doctor).await;

    assert_eq!(decision["decision"], "redirect");
    assert_eq!(decision["redirect"], "/login");
    assert_eq!(decision["session"]["state"], "unauthenticated");
}

#[tokio::test]
async fn given_logged_in_when_logout_then_whoami_skips_network() {
    // Given
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_login(&server, "hospital_admin").await;
    let app = app_for(&server, &dir);
    app.login("admin1", "s3cret").await.unwrap();

    // When
    let logout = app.logout();
    let later = app_for(&server, &dir);
    let whoami = later.whoami().await;

    // Then
    assert_eq!(logout["navigate"], "/login");
    assert_eq!(whoami["state"], "unauthenticated");
    let me_calls = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/auth/me")
        .count();
    assert_eq!(me_calls, 1);
}

#[tokio::test]
async fn given_keystrokes_when_search_then_one_request_for_final_text() {
    // Given
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/staff/search"))
        .and(query_param("role", "doctor"))
        .and(query_param("q", "gre"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "d-1", "displayName": "Dr. Grey", "subtitle": "Surgery"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = app_for(&server, &dir);
    let keystrokes: Vec<String> = ["g", "gr", "gre"].iter().map(|s| s.to_string()).collect();

    // When
    let output = app.search(SearchTarget::Doctor, &keystrokes).await;

    // Then
    assert_that!(output, ok(anything()));
    let output = output.unwrap();
    assert_eq!(output["query"], "gre");
    assert_eq!(output["results"][0]["displayName"], "Dr. Grey");
}
