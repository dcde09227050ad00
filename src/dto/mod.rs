use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{form::FormErrors, models::Note};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Messages keyed by field name
    pub errors: FormErrors,
}
