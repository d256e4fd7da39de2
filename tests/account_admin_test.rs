//! Integration tests for admin account provisioning and the mail-failure
//! asymmetry.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{FailingMailer, TestApp};

#[tokio::test]
async fn test_provision_account_starts_without_credential() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let admin_email = TestApp::unique_email("provisioner");
    app.create_account(&admin_email, Some("password123"), "ADMIN", true)
        .await;
    let admin_token = app.login(&admin_email, "password123").await;

    let invitee = TestApp::unique_email("invitee");
    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({ "email": invitee, "role": "USER" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body.get("email").unwrap(), invitee.as_str());
    assert_eq!(response.body.get("passwordSet").unwrap(), false);
    // The hash never appears on the wire.
    assert!(response.body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_provision_duplicate_email_is_409() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let admin_email = TestApp::unique_email("dup-provisioner");
    app.create_account(&admin_email, Some("password123"), "ADMIN", true)
        .await;
    let admin_token = app.login(&admin_email, "password123").await;

    let existing = TestApp::unique_email("existing");
    app.create_account(&existing, Some("password123"), "USER", true)
        .await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({ "email": existing })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_provision_requires_email() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let admin_email = TestApp::unique_email("empty-provisioner");
    app.create_account(&admin_email, Some("password123"), "ADMIN", true)
        .await;
    let admin_token = app.login(&admin_email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({})),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body.get("message").unwrap().as_str().unwrap();
    assert!(message.contains("Email is required"));
}

#[tokio::test]
async fn test_non_admin_cannot_provision() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = TestApp::unique_email("not-an-admin");
    app.create_account(&email, Some("password123"), "USER", true)
        .await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({ "email": TestApp::unique_email("target") })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body.get("error").unwrap(), "FORBIDDEN");
}

#[tokio::test]
async fn test_list_accounts_is_paginated() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let admin_email = TestApp::unique_email("lister");
    app.create_account(&admin_email, Some("password123"), "ADMIN", true)
        .await;
    let admin_token = app.login(&admin_email, "password123").await;

    let response = app
        .request(
            "GET",
            "/api/admin/users?page=1&limit=5",
            None,
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.get("items").unwrap().as_array().unwrap();
    assert!(items.len() <= 5);
    assert!(response.body.get("totalItems").is_some());
}

#[tokio::test]
async fn test_deactivated_account_cannot_login() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let admin_email = TestApp::unique_email("deactivator");
    app.create_account(&admin_email, Some("password123"), "ADMIN", true)
        .await;
    let admin_token = app.login(&admin_email, "password123").await;

    let victim = TestApp::unique_email("victim");
    let victim_id = app
        .create_account(&victim, Some("password123"), "USER", true)
        .await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/admin/users/{victim_id}/deactivate"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("isActive").unwrap(), false);

    let login = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "email": victim, "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_welcome_mail_failure_fails_provisioning() {
    let Some(app) = TestApp::with_mailer(Arc::new(FailingMailer)).await else {
        return;
    };
    let admin_email = TestApp::unique_email("doomed-provisioner");
    app.create_account(&admin_email, Some("password123"), "ADMIN", true)
        .await;
    let admin_token = app.login(&admin_email, "password123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({ "email": TestApp::unique_email("unreachable") })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = response.body.get("message").unwrap().as_str().unwrap();
    assert!(message.contains("Failed to send welcome email"));
}

#[tokio::test]
async fn test_confirmation_mail_failure_is_not_surfaced() {
    let Some(app) = TestApp::with_mailer(Arc::new(FailingMailer)).await else {
        return;
    };
    let email = TestApp::unique_email("quiet-invitee");
    app.create_account(&email, None, "USER", true).await;

    // The asymmetry: credential setup succeeds even though the
    // confirmation mail bounced.
    let response = app
        .request(
            "POST",
            "/api/set-password",
            Some(serde_json::json!({ "email": email, "newPassword": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    app.login(&email, "password123").await;
}
