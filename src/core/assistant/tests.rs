//! Assistant flow tests against a mock backend.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::core::api::ApiClient;
use crate::core::message::Role;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(&server.uri(), Duration::from_secs(5)).unwrap()
}

async fn mount_json(server: &MockServer, endpoint: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(format!("/api/{}", endpoint)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

fn signed_in(server: &MockServer, dir: &tempfile::TempDir) -> Assistant {
    let store = SessionStore::new(Some(dir.path()));
    store.save("r1").unwrap();
    Assistant::restore(client(server), store)
}

#[test]
fn summary_message_lists_non_zero_counts() {
    let msg = DataSummary {
        attendance: 6,
        marks: 0,
    }
    .message();
    assert_eq!(
        msg,
        "✅ Data loaded successfully!\n\n📊 Attendance: 6 subjects\n\nYou can now ask me anything about your academic performance!"
    );
    let both = DataSummary {
        attendance: 1,
        marks: 12,
    }
    .message();
    assert!(both.contains("📊 Attendance: 1 subjects\n📝 Marks: 12 records\n"));
}

#[test]
fn reply_text_prefers_error_then_response() {
    let reply = ChatReply {
        success: false,
        response: Some("ignored".into()),
        error: Some("Please login first".into()),
    };
    assert_eq!(reply_text(&reply), "Please login first");

    let reply = ChatReply {
        success: true,
        response: Some("Hi".into()),
        error: Some(String::new()),
    };
    assert_eq!(reply_text(&reply), "Hi");

    assert_eq!(reply_text(&ChatReply::default()), CHAT_FALLBACK);
}

#[tokio::test]
async fn login_rejects_blank_credentials_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let err = request_login(&client(&server), "  ", "pw").await.unwrap_err();
    assert!(matches!(err, LoginError::MissingCredentials));
    let err = request_login(&client(&server), "r1", "").await.unwrap_err();
    assert!(matches!(err, LoginError::MissingCredentials));
}

#[tokio::test]
async fn login_surfaces_backend_error() {
    let server = MockServer::start().await;
    mount_json(&server, "login", 401, json!({"error": "Invalid roll number or password"})).await;
    let err = request_login(&client(&server), "r1", "bad").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid roll number or password");
}

#[tokio::test]
async fn login_without_success_flag_fails() {
    let server = MockServer::start().await;
    mount_json(&server, "login", 200, json!({})).await;
    let err = request_login(&client(&server), "r1", "pw").await.unwrap_err();
    assert!(matches!(err, LoginError::NoSuccess));
}

#[tokio::test]
async fn login_persists_roll_number_and_greets() {
    let server = MockServer::start().await;
    mount_json(&server, "login", 200, json!({"success": true, "rollNo": "r1"})).await;
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(Some(dir.path()));
    let mut assistant = Assistant::restore(client(&server), store.clone());
    assert!(!assistant.state().is_signed_in());
    assert!(assistant.transcript().is_empty());

    assistant.login(" r1 ", "pw").await.unwrap();
    assert_eq!(assistant.state().roll_no(), Some("r1"));
    assert_eq!(store.load().as_deref(), Some("r1"));
    assert_eq!(assistant.transcript().messages().len(), 1);
    assert_eq!(assistant.transcript().messages()[0].text, GREETING);
}

#[tokio::test]
async fn unreachable_login_maps_to_connect_message() {
    let server = MockServer::start().await;
    let c = client(&server);
    drop(server);
    let err = request_login(&c, "r1", "pw").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to connect to server. Please try again.");
}

#[tokio::test]
async fn fetch_data_waits_for_both_calls() {
    let server = MockServer::start().await;
    mount_json(&server, "attendance", 200, json!({"attendance": [{}, {}, {}]})).await;
    mount_json(&server, "marks", 200, json!({"marks": [{}, {}]})).await;
    let dir = tempfile::tempdir().unwrap();
    let mut assistant = signed_in(&server, &dir);

    let msg = assistant.fetch_data().await.unwrap();
    assert!(msg.contains("📊 Attendance: 3 subjects"));
    assert!(msg.contains("📝 Marks: 2 records"));
    assert!(assistant.state().data_loaded());
    assert!(!assistant.transcript().is_loading());
    let last = assistant.transcript().messages().last().unwrap();
    assert_eq!(last.text, msg);
}

#[tokio::test]
async fn fetch_data_error_fields_are_not_failures() {
    let server = MockServer::start().await;
    mount_json(&server, "attendance", 400, json!({"error": "Network error"})).await;
    mount_json(&server, "marks", 200, json!({"marks": []})).await;
    let summary = request_data(&client(&server), "r1").await.unwrap();
    assert_eq!(
        summary,
        DataSummary {
            attendance: 0,
            marks: 0
        }
    );
}

#[tokio::test]
async fn fetch_data_collapses_either_failure() {
    let server = MockServer::start().await;
    mount_json(&server, "attendance", 200, json!({"attendance": [{}]})).await;
    Mock::given(method("POST"))
        .and(path("/api/marks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let mut assistant = signed_in(&server, &dir);

    let msg = assistant.fetch_data().await.unwrap();
    assert_eq!(msg, FETCH_FAILED);
    assert!(!assistant.state().data_loaded());
    assert!(!assistant.transcript().is_loading());
}

#[tokio::test]
async fn ask_records_question_and_reply() {
    let server = MockServer::start().await;
    mount_json(&server, "chat", 200, json!({"success": true, "response": "You have **92%**."})).await;
    let dir = tempfile::tempdir().unwrap();
    let mut assistant = signed_in(&server, &dir);

    let reply = assistant.ask("  What is my attendance?  ").await.unwrap();
    assert_eq!(reply.as_deref(), Some("You have **92%**."));
    let msgs = assistant.transcript().messages();
    assert_eq!(msgs[msgs.len() - 2].role, Role::User);
    assert_eq!(msgs[msgs.len() - 2].text, "What is my attendance?");
    assert_eq!(msgs[msgs.len() - 1].role, Role::Assistant);
}

#[tokio::test]
async fn ask_ignores_blank_question() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut assistant = signed_in(&server, &dir);
    let before = assistant.transcript().messages().len();
    assert_eq!(assistant.ask("   ").await.unwrap(), None);
    assert_eq!(assistant.transcript().messages().len(), before);
}

#[tokio::test]
async fn ask_transport_failure_uses_fixed_message() {
    let server = MockServer::start().await;
    mount_json(&server, "chat", 200, json!({})).await;
    let reply = request_reply(&client(&server), "r1", "hi").await;
    assert_eq!(reply, CHAT_FALLBACK);

    drop(server);
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(Some(dir.path()));
    store.save("r1").unwrap();
    let offline = ApiClient::with_base_url("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let mut assistant = Assistant::restore(offline, store);
    assert_eq!(assistant.ask("hi").await.unwrap().as_deref(), Some(CHAT_FAILED));
}

#[tokio::test]
async fn ask_requires_session() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut assistant = Assistant::restore(client(&server), SessionStore::new(Some(dir.path())));
    assert!(assistant.ask("hi").await.is_err());
    assert!(assistant.fetch_data().await.is_err());
}

#[tokio::test]
async fn logout_clears_local_state_even_when_backend_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(Some(dir.path()));
    store.save("r1").unwrap();
    let mut assistant = Assistant::restore(client(&server), store.clone());

    assistant.logout().await.unwrap();
    assert!(!assistant.state().is_signed_in());
    assert!(assistant.transcript().is_empty());
    assert_eq!(store.load(), None);
}
