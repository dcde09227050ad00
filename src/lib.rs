pub mod config;
pub mod dto;
pub mod form;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod views;

use axum::{Router, routing::get};

use std::sync::Arc;

use handlers::{html, rest};
use service::NoteService;

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application: HTML views under `/notes/`, the JSON API
/// under `/api/notes` and Swagger UI.
pub fn router(service: Arc<NoteService>) -> Router {
    // HTML router config
    let html_router = Router::new()
        .route("/", get(html::root))
        .route("/notes/", get(html::note_list))
        .route(
            "/notes/new/",
            get(html::note_create_form).post(html::note_create),
        )
        .route("/notes/{id}/", get(html::note_detail))
        .route(
            "/notes/{id}/edit/",
            get(html::note_update_form).post(html::note_update),
        )
        .route(
            "/notes/{id}/delete/",
            get(html::note_delete_confirm).post(html::note_delete),
        );

    // REST router config
    let rest_router = Router::new()
        .route(
            "/api/notes",
            get(rest::get_all_notes).post(rest::create_note),
        )
        .route(
            "/api/notes/{id}",
            get(rest::get_one_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        );

    Router::new()
        .merge(html_router)
        .merge(rest_router)
        .with_state(service)
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .fallback(html::fallback)
        .layer(TraceLayer::new_for_http())
}
