//! Integration tests for the per-file chat workspace.

use repolens_app::{ChatWorkspace, RelayClient};
use repolens_core::{Role, Speaker};
use repolens_github::GithubClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn workspace_for(server: &MockServer) -> ChatWorkspace {
    let github = GithubClient::new(server.uri(), server.uri(), None, 5);
    let relay = RelayClient::new(server.uri());
    ChatWorkspace::new(github, relay, "octocat", "hello-world")
}

async fn mount_raw_file(server: &MockServer, file_path: &str, content: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/octocat/hello-world/HEAD/{file_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(server)
        .await;
}

#[tokio::test]
async fn selecting_a_file_loads_its_content() {
    let server = MockServer::start().await;
    mount_raw_file(&server, "src/main.rs", "fn main() {}").await;

    let mut ws = workspace_for(&server);
    assert!(ws.file().is_none());

    ws.select_file("src/main.rs").await;
    let file = ws.file().unwrap();
    assert_eq!(file.path, "src/main.rs");
    assert_eq!(file.content, "fn main() {}");
    assert!(ws.transcript().is_empty());
}

#[tokio::test]
async fn ask_appends_user_then_assistant_and_clears_question() {
    let server = MockServer::start().await;
    mount_raw_file(&server, "src/lib.rs", "pub fn add(a: i32, b: i32) -> i32 { a + b }").await;
    Mock::given(method("POST"))
        .and(path("/api/explain"))
        .and(body_partial_json(json!({
            "role": "intern",
            "question": "What does add do?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "It adds two integers."
        })))
        .mount(&server)
        .await;

    let mut ws = workspace_for(&server);
    ws.select_file("src/lib.rs").await;
    ws.set_role(Role::Intern);
    ws.set_pending_question("What does add do?");
    assert!(ws.can_ask());

    ws.ask().await;

    let turns = ws.transcript().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].speaker, Speaker::User);
    assert_eq!(turns[0].text, "What does add do?");
    assert_eq!(turns[1].speaker, Speaker::Assistant);
    assert_eq!(turns[1].text, "It adds two integers.");
    assert_eq!(ws.pending_question(), "");
    assert!(!ws.is_asking());
}

#[tokio::test]
async fn relay_error_is_shown_in_transcript_and_question_kept() {
    let server = MockServer::start().await;
    mount_raw_file(&server, "src/lib.rs", "pub struct Widget;").await;
    Mock::given(method("POST"))
        .and(path("/api/explain"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to generate explanation"
        })))
        .mount(&server)
        .await;

    let mut ws = workspace_for(&server);
    ws.select_file("src/lib.rs").await;
    ws.set_pending_question("Explain this");

    ws.ask().await;

    let turns = ws.transcript().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].speaker, Speaker::User);
    assert_eq!(turns[1].speaker, Speaker::Assistant);
    assert_eq!(turns[1].text, "Error: Failed to generate explanation");
    // The question stays so the user can retry
    assert_eq!(ws.pending_question(), "Explain this");
    assert!(ws.can_ask());
}

#[tokio::test]
async fn ask_is_a_no_op_without_a_file_or_question() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/explain"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    mount_raw_file(&server, "a.rs", "struct A;").await;

    let mut ws = workspace_for(&server);

    // No file loaded yet
    ws.set_pending_question("hello?");
    assert!(!ws.can_ask());
    ws.ask().await;
    assert!(ws.transcript().is_empty());

    // File loaded but a blank question
    ws.select_file("a.rs").await;
    ws.set_pending_question("   ");
    assert!(!ws.can_ask());
    ws.ask().await;
    assert!(ws.transcript().is_empty());
}

#[tokio::test]
async fn selecting_another_file_resets_the_conversation() {
    let server = MockServer::start().await;
    mount_raw_file(&server, "a.rs", "struct A;").await;
    mount_raw_file(&server, "b.rs", "struct B;").await;
    Mock::given(method("POST"))
        .and(path("/api/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "A unit struct."
        })))
        .mount(&server)
        .await;

    let mut ws = workspace_for(&server);
    ws.select_file("a.rs").await;
    ws.set_pending_question("What is A?");
    ws.ask().await;
    assert_eq!(ws.transcript().len(), 2);

    ws.set_pending_question("draft about A");
    ws.select_file("b.rs").await;

    assert_eq!(ws.file().unwrap().path, "b.rs");
    assert!(ws.transcript().is_empty());
    assert_eq!(ws.pending_question(), "");
}

#[tokio::test]
async fn failed_fetch_still_resets_and_disables_asking() {
    let server = MockServer::start().await;
    mount_raw_file(&server, "a.rs", "struct A;").await;
    Mock::given(method("GET"))
        .and(path("/octocat/hello-world/HEAD/missing.rs"))
        .respond_with(ResponseTemplate::new(404).set_body_string("404: Not Found"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "A unit struct."
        })))
        .mount(&server)
        .await;

    let mut ws = workspace_for(&server);
    ws.select_file("a.rs").await;
    ws.set_pending_question("What is A?");
    ws.ask().await;
    assert_eq!(ws.transcript().len(), 2);

    ws.select_file("missing.rs").await;

    assert!(ws.file().is_none());
    assert!(ws.transcript().is_empty());
    assert_eq!(ws.pending_question(), "");
    ws.set_pending_question("anything");
    assert!(!ws.can_ask());
}

#[tokio::test]
async fn conversation_context_is_sent_with_each_question() {
    let server = MockServer::start().await;
    mount_raw_file(&server, "lib.rs", "pub fn f() {}").await;
    // Mounted first so the follow-up question matches the fuller
    // conversation rather than the prefix of it
    Mock::given(method("POST"))
        .and(path("/api/explain"))
        .and(body_partial_json(json!({
            "conversation": [
                {"role": "user", "content": "first"},
                {"role": "assistant", "content": "first answer"},
                {"role": "user", "content": "second"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "second answer"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/explain"))
        .and(body_partial_json(json!({
            "conversation": [{"role": "user", "content": "first"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "first answer"
        })))
        .mount(&server)
        .await;

    let mut ws = workspace_for(&server);
    ws.select_file("lib.rs").await;

    ws.set_pending_question("first");
    ws.ask().await;
    ws.set_pending_question("second");
    ws.ask().await;

    let turns = ws.transcript().turns();
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[3].text, "second answer");
}
