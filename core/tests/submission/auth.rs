// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use nextup_core::{
    CONNECTION_GUIDANCE, LoginDraft, SignUpDraft, SubmissionResult, ValidationError, login,
    sign_up,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::mock_client;

fn sign_up_draft() -> SignUpDraft {
    SignUpDraft {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

fn login_draft() -> LoginDraft {
    LoginDraft {
        email: "ada@example.com".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn sign_up_sends_account_without_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(serde_json::json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "secret1",
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "message": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let result = sign_up(&client, &sign_up_draft()).await;

    assert_eq!(result, SubmissionResult::Success);
}

#[tokio::test]
async fn sign_up_invalid_draft_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let draft = SignUpDraft {
        confirm_password: "other1".to_string(),
        ..sign_up_draft()
    };

    let result = sign_up(&client, &draft).await;

    assert_eq!(
        result,
        SubmissionResult::ValidationFailure(ValidationError::PasswordMismatch.to_string())
    );
}

#[tokio::test]
async fn sign_up_rejection_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let result = sign_up(&client, &sign_up_draft()).await;

    assert_eq!(
        result,
        SubmissionResult::ServerRejection("Something went wrong".to_string())
    );
}

#[tokio::test]
async fn login_accepts_any_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "ada@example.com",
            "password": "secret1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "t" })))
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let result = login(&client, &login_draft()).await;

    assert!(result.is_success());
}

#[tokio::test]
async fn login_rejection_uses_message_or_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({ "message": "Wrong password" })),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let client = mock_client(&server);

    let first = login(&client, &login_draft()).await;
    let second = login(&client, &login_draft()).await;

    assert_eq!(
        first,
        SubmissionResult::ServerRejection("Wrong password".to_string())
    );
    assert_eq!(
        second,
        SubmissionResult::ServerRejection("Invalid credentials".to_string())
    );
}

#[tokio::test]
async fn login_unreachable_server_gives_guidance() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = nextup_api::ApiClient::new(nextup_core::ApiConfig::new(format!(
        "http://127.0.0.1:{port}"
    )))
    .unwrap();

    let result = login(&client, &login_draft()).await;

    assert_eq!(result.title(), "Connection Error");
    assert_eq!(result.message(), Some(CONNECTION_GUIDANCE));
}
