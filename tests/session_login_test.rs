use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use wp_draft_dedup::{DedupError, LoginForm, LoginOutcome, SessionClient};

fn form(remember: bool) -> LoginForm {
    LoginForm {
        username: "editor".to_string(),
        password: "pa ss&word".to_string(),
        remember,
    }
}

fn client_for(server: &MockServer) -> SessionClient {
    SessionClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_successful_login_redirects_home() {
    let server = MockServer::start();
    let login_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("username=editor")
            .body_contains("password=pa+ss%26word")
            .body_contains("rememberme=forever");
        then.status(200)
            .header("Set-Cookie", "session=abc123; Path=/; HttpOnly")
            .json_body(json!({"success": true}));
    });

    let outcome = client_for(&server).login(&form(true)).await.unwrap();

    login_mock.assert();
    assert_eq!(
        outcome,
        LoginOutcome::Success {
            redirect: "/".to_string()
        }
    );
}

#[tokio::test]
async fn test_rejected_login_uses_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/login")
            .body("username=editor&password=pa+ss%26word&rememberme=");
        then.status(401)
            .json_body(json!({"success": false, "error": "Account locked"}));
    });

    // rememberme 未勾選時送出空字串
    let outcome = client_for(&server).login(&form(false)).await;

    match outcome {
        Ok(LoginOutcome::Rejected { message }) => assert_eq!(message, "Account locked"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_login_without_message_uses_default() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).json_body(json!({"success": false}));
    });

    let outcome = client_for(&server).login(&form(false)).await.unwrap();

    assert_eq!(
        outcome,
        LoginOutcome::Rejected {
            message: "Invalid username or password".to_string()
        }
    );
}

#[tokio::test]
async fn test_success_flag_ignored_on_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(500).json_body(json!({"success": true}));
    });

    let outcome = client_for(&server).login(&form(false)).await.unwrap();

    assert!(matches!(outcome, LoginOutcome::Rejected { .. }));
}

#[tokio::test]
async fn test_non_json_response_is_a_serialization_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(502).body("<html>Bad gateway</html>");
    });

    let err = client_for(&server).login(&form(false)).await.unwrap_err();

    assert!(matches!(err, DedupError::SerializationError(_)));
    assert_eq!(err.user_friendly_message(), "An error occurred. Please try again.");
}

#[tokio::test]
async fn test_session_cookie_is_sent_on_redirect() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200)
            .header("Set-Cookie", "session=abc123; Path=/; HttpOnly")
            .json_body(json!({"success": true}));
    });
    let home_mock = server.mock(|when, then| {
        when.method(GET).path("/").header("cookie", "session=abc123");
        then.status(200).body("<html>Dashboard</html>");
    });

    let client = client_for(&server);
    let redirect = match client.login(&form(true)).await.unwrap() {
        LoginOutcome::Success { redirect } => redirect,
        other => panic!("unexpected outcome: {:?}", other),
    };
    let status = client.open(&redirect).await.unwrap();

    home_mock.assert();
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_open_without_session_reports_status() {
    let server = MockServer::start();
    let home_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(401);
    });

    let err = client_for(&server).open("/").await.unwrap_err();

    home_mock.assert();
    assert!(matches!(err, DedupError::HttpStatusError { status: 401, .. }));
}
