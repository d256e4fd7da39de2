//! Integration tests for the token gateway: rotation, sliding-window
//! staleness, and session invalidation.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_authenticated_call_rotates_token() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = TestApp::unique_email("rotate");
    app.create_account(&email, Some("password123"), "USER", true)
        .await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request("GET", "/api/posts/my-posts", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rotated = response.refresh_token().expect("No rotated token");
    assert_ne!(rotated, token);

    // The rotated token is itself accepted on the next call, which
    // rotates again.
    let next = app
        .request("GET", "/api/posts/my-posts", None, Some(&rotated))
        .await;
    assert_eq!(next.status, StatusCode::OK);
    assert!(next.refresh_token().is_some());
}

#[tokio::test]
async fn test_missing_header_is_401() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/posts/my-posts", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.is_null());
}

#[tokio::test]
async fn test_garbage_token_is_401() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "GET",
            "/api/posts/my-posts",
            None,
            Some("not.a.real-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_stale_session_is_401_even_with_live_token() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = TestApp::unique_email("stale");
    let account_id = app
        .create_account(&email, Some("password123"), "USER", true)
        .await;
    let token = app.login(&email, "password123").await;

    // Six minutes idle: past the 5-minute window. The token itself is
    // seconds old and cryptographically valid — the session is the
    // authority.
    app.age_sessions(account_id, 6).await;

    let response = app
        .request("GET", "/api/posts/my-posts", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_activity_inside_window_keeps_session_alive() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = TestApp::unique_email("sliding");
    let account_id = app
        .create_account(&email, Some("password123"), "USER", true)
        .await;
    let token = app.login(&email, "password123").await;

    // Four minutes idle: still inside the window. The pass resets the
    // clock, so another four-minute gap later the session remains live.
    app.age_sessions(account_id, 4).await;
    let response = app
        .request("GET", "/api/posts/my-posts", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let rotated = response.refresh_token().unwrap();

    app.age_sessions(account_id, 4).await;
    let response = app
        .request("GET", "/api/posts/my-posts", None, Some(&rotated))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalidated_session_is_401() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = TestApp::unique_email("invalidate");
    let account_id = app
        .create_account(&email, Some("password123"), "USER", true)
        .await;
    let token = app.login(&email, "password123").await;

    let session_id = app.latest_session_id(account_id).await;
    app.session_store
        .invalidate(session_id)
        .await
        .expect("Failed to invalidate session");

    let response = app
        .request("GET", "/api/posts/my-posts", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_deleted_session_is_401() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = TestApp::unique_email("orphan");
    let account_id = app
        .create_account(&email, Some("password123"), "USER", true)
        .await;
    let token = app.login(&email, "password123").await;

    sqlx::query("DELETE FROM sessions WHERE account_id = $1")
        .bind(account_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .request("GET", "/api/posts/my-posts", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
