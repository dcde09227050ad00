use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use super::{NoteStore, StoreError, embedded::migrations};
use crate::models::{Note, NoteDraft};

pub struct PostgresRepository {
    client: Client,
}

impl PostgresRepository {
    pub async fn new(database_dsn: &str) -> Result<Self, StoreError> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), StoreError> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }

    fn client(&self) -> Result<&Client, StoreError> {
        if self.client.is_closed() {
            return Err(StoreError::Unavailable(
                "database connection is closed".to_string(),
            ));
        }
        Ok(&self.client)
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
    }
}

#[async_trait]
impl NoteStore for PostgresRepository {
    async fn insert(&self, draft: NoteDraft) -> Result<Note, StoreError> {
        let row = self
            .client()?
            .query_one(
                "INSERT INTO notes (title, content) VALUES ($1, $2) RETURNING id, title, content",
                &[&draft.title, &draft.content],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn fetch(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let row = self
            .client()?
            .query_opt("SELECT id, title, content FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn fetch_all(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client()?
            .query("SELECT id, title, content FROM notes ORDER BY id", &[])
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Option<Note>, StoreError> {
        let row = self
            .client()?
            .query_opt(
                "UPDATE notes SET title = $1, content = $2 WHERE id = $3 RETURNING id, title, content",
                &[&draft.title, &draft.content, &id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let rows = self
            .client()?
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }
}
