use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{NoteStore, StoreError};
use crate::models::{Note, NoteDraft};

/// In-process note store. Ids are handed out sequentially from 1 and are not
/// reused after a delete.
#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    notes: BTreeMap<i64, Note>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryRepository {
    async fn insert(&self, draft: NoteDraft) -> Result<Note, StoreError> {
        let mut state = self.state.lock().await;
        state.last_id += 1;

        let note = Note::from_draft(state.last_id, draft);
        state.notes.insert(note.id, note.clone());

        Ok(note)
    }

    async fn fetch(&self, id: i64) -> Result<Option<Note>, StoreError> {
        Ok(self.state.lock().await.notes.get(&id).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.state.lock().await.notes.values().cloned().collect())
    }

    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Option<Note>, StoreError> {
        let mut state = self.state.lock().await;

        Ok(state.notes.get_mut(&id).map(|note| {
            note.title = draft.title;
            note.content = draft.content;
            note.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.state.lock().await.notes.remove(&id).is_some())
    }
}
