use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use tower::ServiceExt;

use sticky_notes::{
    models::{Note, NoteDraft},
    repository::{NoteStore, StoreError},
    router,
    service::NoteService,
};

/// Store whose every operation fails, as a dropped database would.
struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("database connection is closed".to_string())
}

#[async_trait]
impl NoteStore for UnavailableStore {
    async fn insert(&self, _draft: NoteDraft) -> Result<Note, StoreError> {
        Err(unavailable())
    }

    async fn fetch(&self, _id: i64) -> Result<Option<Note>, StoreError> {
        Err(unavailable())
    }

    async fn fetch_all(&self) -> Result<Vec<Note>, StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _id: i64, _draft: NoteDraft) -> Result<Option<Note>, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}

fn app() -> Router {
    router(Arc::new(NoteService::new(Arc::new(UnavailableStore))))
}

async fn send(app: &Router, method: &str, uri: &str, form: Option<&str>) -> Response {
    let request = Request::builder().uri(uri).method(method);
    let request = match form {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    };

    app.clone()
        .oneshot(request.expect("request"))
        .await
        .expect("response")
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn list_view_answers_500_with_error_page() {
    let app = app();

    let response = send(&app, "GET", "/notes/", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(body.contains("Server error"));
    assert!(body.contains("Failed to list notes"));
}

#[tokio::test]
async fn html_handlers_answer_500_on_every_route() {
    let app = app();

    for (method, uri, form) in [
        ("GET", "/notes/1/", None),
        ("POST", "/notes/new/", Some("title=a&content=b")),
        ("GET", "/notes/1/edit/", None),
        ("POST", "/notes/1/edit/", Some("title=a&content=b")),
        ("GET", "/notes/1/delete/", None),
        ("POST", "/notes/1/delete/", Some("")),
    ] {
        let response = send(&app, method, uri, form).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{method} {uri}"
        );
    }
}

#[tokio::test]
async fn invalid_submission_still_re_renders_form() {
    let app = app();

    let response = send(&app, "POST", "/notes/new/", Some("title=&content=")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("This field is required."));
}

#[tokio::test]
async fn json_api_answers_500() {
    let app = app();

    let response = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Failed to get all notes");

    let response = send(&app, "GET", "/api/notes/1", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn server_keeps_answering_after_a_failure() {
    let app = app();

    send(&app, "GET", "/notes/", None).await;
    let response = send(&app, "GET", "/notes/new/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
}
