use axum::{
    Form,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    form::{FormErrors, NoteForm},
    service::{NoteError, NoteService},
    views::{self, FormPage},
};

pub const LIST_PATH: &str = "/notes/";
pub const CREATE_PATH: &str = "/notes/new/";

pub fn detail_path(id: i64) -> String {
    format!("/notes/{id}/")
}

pub fn edit_path(id: i64) -> String {
    format!("/notes/{id}/edit/")
}

#[debug_handler]
pub async fn note_list(State(service): State<Arc<NoteService>>) -> Response {
    match service.list_notes().await {
        Ok(notes) => build_ok_response(views::note_list(&notes)),
        Err(e) => handle_note_error(&e, "Failed to list notes"),
    }
}

#[debug_handler]
pub async fn note_detail(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.get_note(id).await {
        Ok(note) => build_ok_response(views::note_detail(&note)),
        Err(e) => handle_note_error(&e, "Failed to get note"),
    }
}

#[debug_handler]
pub async fn note_create_form() -> Response {
    render_create_form(&NoteForm::default(), &FormErrors::default())
}

#[debug_handler]
pub async fn note_create(
    State(service): State<Arc<NoteService>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let form = NoteForm::from_pairs(fields);
    match service.create_note(&form).await {
        Ok(note) => redirect(&detail_path(note.id)),
        Err(NoteError::Validation(errors)) => render_create_form(&form, &errors),
        Err(e) => handle_note_error(&e, "Failed to create note"),
    }
}

#[debug_handler]
pub async fn note_update_form(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_note(id).await {
        Ok(note) => render_update_form(id, &NoteForm::from_note(&note), &FormErrors::default()),
        Err(e) => handle_note_error(&e, "Failed to get note"),
    }
}

#[debug_handler]
pub async fn note_update(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let form = NoteForm::from_pairs(fields);
    match service.update_note(id, &form).await {
        Ok(note) => redirect(&detail_path(note.id)),
        Err(NoteError::Validation(errors)) => render_update_form(id, &form, &errors),
        Err(e) => handle_note_error(&e, "Failed to update note"),
    }
}

#[debug_handler]
pub async fn note_delete_confirm(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_note(id).await {
        Ok(note) => build_ok_response(views::note_confirm_delete(&note)),
        Err(e) => handle_note_error(&e, "Failed to get note"),
    }
}

#[debug_handler]
pub async fn note_delete(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.delete_note(id).await {
        Ok(()) => redirect(LIST_PATH),
        Err(e) => handle_note_error(&e, "Failed to delete note"),
    }
}

pub async fn root() -> Response {
    redirect(LIST_PATH)
}

pub async fn fallback() -> Response {
    handle_not_found_error()
}

fn render_create_form(form: &NoteForm, errors: &FormErrors) -> Response {
    build_ok_response(views::note_form(&FormPage {
        heading: "New note",
        action: CREATE_PATH,
        cancel_url: LIST_PATH,
        form,
        errors,
    }))
}

fn render_update_form(id: i64, form: &NoteForm, errors: &FormErrors) -> Response {
    let action = edit_path(id);
    let cancel_url = detail_path(id);

    build_ok_response(views::note_form(&FormPage {
        heading: "Edit note",
        action: &action,
        cancel_url: &cancel_url,
        form,
        errors,
    }))
}

fn build_ok_response(html: String) -> Response {
    (StatusCode::OK, Html(html)).into_response()
}

fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

fn handle_not_found_error() -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found())).into_response()
}

fn handle_note_error(err: &NoteError, custom_error_string: &str) -> Response {
    if let NoteError::NotFound(id) = err {
        tracing::debug!("note {id} not found");
        return handle_not_found_error();
    }

    tracing::error!("{custom_error_string}: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::internal_error(custom_error_string)),
    )
        .into_response()
}
