//! Integration tests for the GitHub client against a mock HTTP server.

use repolens_github::{GithubClient, GithubError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GithubClient {
    GithubClient::new(server.uri(), server.uri(), None, 5)
}

#[tokio::test]
async fn lists_repositories_with_typed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "hello-world",
                "owner": {"login": "octocat"},
                "description": "My first repo",
                "html_url": "https://github.com/octocat/hello-world",
                "stargazers_count": 42
            },
            {
                "id": 2,
                "name": "spoon-knife",
                "owner": {"login": "octocat"}
            }
        ])))
        .mount(&server)
        .await;

    let repos = client_for(&server).list_repos("octocat").await.unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "hello-world");
    assert_eq!(repos[0].owner.login, "octocat");
    assert_eq!(repos[0].stargazers_count, Some(42));
    assert_eq!(repos[1].description, None);
}

#[tokio::test]
async fn sends_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(header("Authorization", "token ghp_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = GithubClient::new(server.uri(), server.uri(), Some("ghp_secret".into()), 5);
    let repos = client.list_repos("octocat").await.unwrap();
    assert!(repos.is_empty());
}

#[tokio::test]
async fn search_users_encodes_query_and_unwraps_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", "oc to"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "items": [{"login": "octocat"}, {"login": "octodog"}]
        })))
        .mount(&server)
        .await;

    let users = client_for(&server).search_users("oc to").await.unwrap();
    let logins: Vec<&str> = users.iter().map(|u| u.login.as_str()).collect();
    assert_eq!(logins, ["octocat", "octodog"]);
}

#[tokio::test]
async fn tree_listing_keeps_entry_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/git/trees/HEAD"))
        .and(query_param("recursive", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tree": [
                {"path": "src", "type": "tree"},
                {"path": "src/main.rs", "type": "blob"},
                {"path": "README.md", "type": "blob"}
            ]
        })))
        .mount(&server)
        .await;

    let entries = client_for(&server)
        .list_tree("octocat", "hello-world")
        .await
        .unwrap();

    let blobs: Vec<&str> = entries
        .iter()
        .filter(|e| e.is_blob())
        .map(|e| e.path.as_str())
        .collect();
    assert_eq!(blobs, ["src/main.rs", "README.md"]);
}

#[tokio::test]
async fn raw_file_returns_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/octocat/hello-world/HEAD/src/main.rs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fn main() {}\n"))
        .mount(&server)
        .await;

    let content = client_for(&server)
        .raw_file("octocat", "hello-world", "src/main.rs")
        .await
        .unwrap();
    assert_eq!(content, "fn main() {}\n");
}

#[tokio::test]
async fn profile_readme_decodes_base64_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/octocat/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "IyBIZWxs\nbwpXb3Js\nZA==\n",
            "encoding": "base64"
        })))
        .mount(&server)
        .await;

    let readme = client_for(&server).profile_readme("octocat").await.unwrap();
    assert_eq!(readme.as_deref(), Some("# Hello\nWorld"));
}

#[tokio::test]
async fn missing_profile_readme_is_none_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/ghost/ghost/readme"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let readme = client_for(&server).profile_readme("ghost").await.unwrap();
    assert_eq!(readme, None);
}

#[tokio::test]
async fn non_success_status_surfaces_as_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ratelimited/repos"))
        .respond_with(ResponseTemplate::new(403).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_repos("ratelimited")
        .await
        .unwrap_err();
    match err {
        GithubError::Status { status, message } => {
            assert_eq!(status, 403);
            assert!(message.contains("rate limit"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_is_rejected_at_the_boundary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/broken/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "not-a-number", "name": 7}
        ])))
        .mount(&server)
        .await;

    let err = client_for(&server).list_repos("broken").await.unwrap_err();
    assert!(matches!(err, GithubError::InvalidResponse(_)));
}
