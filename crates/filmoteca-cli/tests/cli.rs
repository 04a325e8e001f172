//! CLI integration tests against a mock API.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{assert_success, run_cli, run_cli_async, stderr};

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "error": false, "code": 200, "message": "OK", "data": data })
}

async fn mount_login(server: &MockServer, roles: &[&str]) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).insert_header("authentication", "Bearer tok123"))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/a@b.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "email": "a@b.com",
            "name": "Alice",
            "roles": roles,
            "friends": [
                { "friendEmail": "c@d.com", "friendName": "Carol", "status": "PENDING" }
            ]
        }))))
        .mount(server)
        .await;
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--help"], "http://localhost:8080", &dir.path().join("s.json"));
    let stdout = assert_success(&["--help"], &output);
    assert!(stdout.contains("movies"));
    assert!(stdout.contains("login"));
}

#[test]
fn test_comments_requires_scope() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["comments"], "http://localhost:8080", &dir.path().join("s.json"));
    assert!(!output.status.success());
}

#[test]
fn test_rejects_plain_http_remote_api() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["movies"], "http://films.example.org", &dir.path().join("s.json"));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid API URL"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_whoami_logout() {
    let server = MockServer::start().await;
    mount_login(&server, &["ROLE_USER"]).await;

    let dir = TempDir::new().unwrap();
    let session = dir.path().join("session.json");
    let api = server.uri();

    let args = ["login", "a@b.com", "--password", "pw"];
    let output = run_cli_async(&args, &api, &session).await;
    let stdout = assert_success(&args, &output);
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains("Alice"));
    assert!(session.exists());

    let output = run_cli_async(&["whoami"], &api, &session).await;
    let stdout = assert_success(&["whoami"], &output);
    assert!(stdout.contains("a@b.com"));
    assert!(stdout.contains("ROLE_USER"));

    let output = run_cli_async(&["logout"], &api, &session).await;
    assert_success(&["logout"], &output);
    assert!(!session.exists());

    let output = run_cli_async(&["whoami"], &api, &session).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Not logged in"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = dir.path().join("session.json");

    let output =
        run_cli_async(&["login", "a@b.com", "--password", "bad"], &server.uri(), &session).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Login failed"));
    assert!(!session.exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_movies_listing() {
    let server = MockServer::start().await;
    let base = format!("{}/movies", server.uri());

    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(query_param("genres", "Action"))
        .and(query_param("sort", "-rating"))
        .and(query_param("page", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "link",
                    format!(
                        "<{base}?page=0>; rel=\"self\", <{base}?page=0>; rel=\"first\", <{base}?page=3>; rel=\"last\""
                    )
                    .as_str(),
                )
                .set_body_json(envelope(json!([
                    { "id": "949", "title": "Heat", "genres": ["Action", "Crime"],
                      "releaseDate": { "day": 15, "month": 12, "year": 1995 } }
                ]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let args = ["movies", "--genre", "Action", "--sort", "-rating"];
    let output = run_cli_async(&args, &server.uri(), &dir.path().join("s.json")).await;
    let stdout = assert_success(&args, &output);

    assert!(stdout.contains("Heat (1995)"));
    assert!(stdout.contains("page 1"));
    assert!(stdout.contains("next >"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_edit_movie_requires_admin() {
    let server = MockServer::start().await;
    mount_login(&server, &["ROLE_USER"]).await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = dir.path().join("session.json");
    let api = server.uri();

    let args = ["login", "a@b.com", "--password", "pw"];
    assert_success(&args, &run_cli_async(&args, &api, &session).await);

    let output = run_cli_async(&["edit-movie", "949", "--runtime", "171"], &api, &session).await;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("401"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_accept_friend_request() {
    let server = MockServer::start().await;
    mount_login(&server, &["ROLE_USER"]).await;

    Mock::given(method("PATCH"))
        .and(path("/users/a@b.com/friends/c@d.com"))
        .and(header("authorization", "Bearer tok123"))
        .and(body_json(json!([{ "op": "replace", "path": "/status", "value": "ACCEPTED" }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "email": "a@b.com",
            "name": "Alice",
            "friends": [
                { "friendEmail": "c@d.com", "friendName": "Carol", "status": "ACCEPTED" }
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = dir.path().join("session.json");
    let api = server.uri();

    let args = ["login", "a@b.com", "--password", "pw"];
    assert_success(&args, &run_cli_async(&args, &api, &session).await);

    let output = run_cli_async(&["friends"], &api, &session).await;
    let stdout = assert_success(&["friends"], &output);
    assert!(stdout.contains("Pending requests"));
    assert!(stdout.contains("Carol"));

    let args = ["friends", "accept", "c@d.com"];
    let output = run_cli_async(&args, &api, &session).await;
    let stdout = assert_success(&args, &output);
    assert!(stdout.contains("c@d.com is now your friend"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_friend_looks_up_name() {
    let server = MockServer::start().await;
    mount_login(&server, &["ROLE_USER"]).await;

    Mock::given(method("GET"))
        .and(path("/users/e@f.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "email": "e@f.com",
            "name": "Eve"
        }))))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/a@b.com/friends"))
        .and(body_json(json!({ "friendEmail": "e@f.com", "friendName": "Eve" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
            "email": "a@b.com",
            "name": "Alice",
            "friends": [
                { "friendEmail": "e@f.com", "friendName": "Eve", "status": "PENDING" }
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = dir.path().join("session.json");
    let api = server.uri();

    let args = ["login", "a@b.com", "--password", "pw"];
    assert_success(&args, &run_cli_async(&args, &api, &session).await);

    let args = ["friends", "add", "e@f.com"];
    let output = run_cli_async(&args, &api, &session).await;
    let stdout = assert_success(&args, &output);
    assert!(stdout.contains("Friend request sent to Eve <e@f.com>"));
}
