use crate::{
    form::{FormErrors, NoteForm},
    models::Note,
    repository::{NoteStore, StoreError},
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("note {0} not found")]
    NotFound(i64),

    #[error("note submission failed validation")]
    Validation(FormErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, NoteError> {
        Ok(self.store.fetch_all().await?)
    }

    pub async fn get_note(&self, id: i64) -> Result<Note, NoteError> {
        self.store.fetch(id).await?.ok_or(NoteError::NotFound(id))
    }

    pub async fn create_note(&self, form: &NoteForm) -> Result<Note, NoteError> {
        let draft = form.validate().map_err(NoteError::Validation)?;
        let note = self.store.insert(draft).await?;

        tracing::info!("created note {} ({:?})", note.id, note.title);
        Ok(note)
    }

    /// Looks the note up before validating, so an unknown id wins over a bad
    /// submission.
    pub async fn update_note(&self, id: i64, form: &NoteForm) -> Result<Note, NoteError> {
        self.get_note(id).await?;
        let draft = form.validate().map_err(NoteError::Validation)?;

        let note = self
            .store
            .update(id, draft)
            .await?
            .ok_or(NoteError::NotFound(id))?;

        tracing::info!("updated note {}", note.id);
        Ok(note)
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), NoteError> {
        if !self.store.delete(id).await? {
            return Err(NoteError::NotFound(id));
        }

        tracing::info!("deleted note {}", id);
        Ok(())
    }
}
