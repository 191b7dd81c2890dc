// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Cell, RefCell};
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use nextup_core::{
    ApiError, ApiResponse, Backend, CONNECTION_GUIDANCE, CreateProjectRequest, LoginRequest,
    ProjectDraft, ProjectForm, RegisterRequest, SubmissionPhase, SubmissionResult,
    ValidationError, submit_project,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    assert_validation_failure, launch_form, mock_client, project_created_body,
};

#[tokio::test]
async fn submit_launch_example_succeeds_and_resets() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Launch",
            "description": "Ship v1",
            "startDate": "2025-06-01",
            "endDate": "2025-06-20",
            "status": "active",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_created_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(launch_form());

    // Act
    let result = submit_project(&form, &client).await;

    // Assert
    assert_eq!(result, Some(SubmissionResult::Success));
    let form = form.borrow();
    assert_eq!(form.draft(), &ProjectDraft::default());
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.submit_label(), "Create Project");
}

#[tokio::test]
async fn submit_rejection_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "message": "Duplicate name" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(launch_form());
    let before = form.borrow().draft().clone();

    let result = submit_project(&form, &client).await;

    assert_eq!(
        result,
        Some(SubmissionResult::ServerRejection("Duplicate name".to_string()))
    );
    assert_eq!(form.borrow().draft(), &before);
    assert!(form.borrow().can_submit());
}

#[tokio::test]
async fn submit_rejection_with_unparseable_body_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(launch_form());

    let result = submit_project(&form, &client).await;

    assert_eq!(
        result,
        Some(SubmissionResult::ServerRejection(
            "Something went wrong".to_string()
        ))
    );
    assert_eq!(form.borrow().draft().name, "Launch");
}

#[tokio::test]
async fn submit_rejection_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "error": "boom" })),
        )
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(launch_form());

    let result = submit_project(&form, &client).await;

    assert_eq!(
        result,
        Some(SubmissionResult::ServerRejection(
            "Something went wrong".to_string()
        ))
    );
}

#[tokio::test]
async fn submit_while_in_flight_sends_nothing() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(project_created_body())
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(launch_form());

    // Act - the second submit is polled while the first awaits the response
    let (first, second) = futures::join!(submit_project(&form, &client), async {
        let label = form.borrow().submit_label();
        (label, submit_project(&form, &client).await)
    });

    // Assert
    assert_eq!(first, Some(SubmissionResult::Success));
    assert_eq!(second, ("Creating...", None));
    assert_eq!(form.borrow().phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn submit_can_retry_after_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_created_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(launch_form());

    let first = submit_project(&form, &client).await;
    let second = submit_project(&form, &client).await;

    assert!(matches!(first, Some(SubmissionResult::ServerRejection(_))));
    assert_eq!(second, Some(SubmissionResult::Success));
}

#[tokio::test]
async fn submit_invalid_form_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(ProjectForm::new());

    let result = submit_project(&form, &client).await;

    assert_validation_failure(result, ValidationError::MissingName);
    assert_eq!(form.borrow().phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn submit_unreachable_server_is_transport_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = nextup_api::ApiClient::new(nextup_core::ApiConfig::new(format!(
        "http://127.0.0.1:{port}"
    )))
    .unwrap();
    let form = RefCell::new(launch_form());

    let result = submit_project(&form, &client).await;

    assert_eq!(
        result,
        Some(SubmissionResult::TransportFailure(
            CONNECTION_GUIDANCE.to_string()
        ))
    );
    assert_eq!(form.borrow().draft().name, "Launch");
    assert!(!form.borrow().is_loading());
}

#[tokio::test]
async fn submit_html_on_created_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;
    let client = mock_client(&server);
    let form = RefCell::new(launch_form());

    let result = submit_project(&form, &client).await;

    assert!(matches!(result, Some(SubmissionResult::TransportFailure(_))));
    assert_eq!(form.borrow().draft().name, "Launch");
}

/// Backend that answers every project request with a fixed status.
struct FixedBackend {
    status: u16,
    body: &'static str,
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl Backend for FixedBackend {
    async fn create_project(&self, _: &CreateProjectRequest) -> Result<ApiResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        Ok(ApiResponse::new(self.status, self.body))
    }

    async fn login(&self, _: &LoginRequest) -> Result<ApiResponse, ApiError> {
        unreachable!("not used by project submission")
    }

    async fn register(&self, _: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        unreachable!("not used by project submission")
    }
}

#[tokio::test]
async fn submit_requires_created_status() {
    let backend = FixedBackend {
        status: 200,
        body: "{}",
        calls: Cell::new(0),
    };
    let form = RefCell::new(launch_form());

    let result = submit_project(&form, &backend).await;

    assert_eq!(
        result,
        Some(SubmissionResult::ServerRejection(
            "Something went wrong".to_string()
        ))
    );
    assert_eq!(backend.calls.get(), 1);
    assert_eq!(form.borrow().draft().name, "Launch");
}

#[tokio::test]
async fn submit_accepts_created_without_body() {
    let backend = FixedBackend {
        status: 201,
        body: "",
        calls: Cell::new(0),
    };
    let form = RefCell::new(launch_form());

    let result = submit_project(&form, &backend).await;

    assert_eq!(result, Some(SubmissionResult::Success));
    assert_eq!(form.borrow().draft(), &ProjectDraft::default());
}

/// Backend whose project request never completes.
struct StalledBackend;

#[async_trait(?Send)]
impl Backend for StalledBackend {
    async fn create_project(&self, _: &CreateProjectRequest) -> Result<ApiResponse, ApiError> {
        futures::future::pending().await
    }

    async fn login(&self, _: &LoginRequest) -> Result<ApiResponse, ApiError> {
        unreachable!("not used by project submission")
    }

    async fn register(&self, _: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        unreachable!("not used by project submission")
    }
}

#[tokio::test]
async fn dropped_submission_returns_form_to_idle() {
    let form = RefCell::new(launch_form());

    {
        let mut pending = Box::pin(submit_project(&form, &StalledBackend));
        assert_eq!((&mut pending).now_or_never(), None);
        assert!(form.borrow().is_loading());
        assert_eq!(form.borrow().submit_label(), "Creating...");
    }

    assert_eq!(form.borrow().phase(), SubmissionPhase::Idle);
    assert_eq!(form.borrow().submit_label(), "Create Project");
    assert_eq!(form.borrow().draft().name, "Launch");

    let backend = FixedBackend {
        status: 201,
        body: "",
        calls: Cell::new(0),
    };
    let result = submit_project(&form, &backend).await;
    assert_eq!(result, Some(SubmissionResult::Success));
    assert_eq!(backend.calls.get(), 1);
}
