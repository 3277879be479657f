//! PostgreSQL implementation of GeneratedDocumentRepository.
//!
//! The one-document-per-project invariant lives in the schema (unique
//! constraint on `project_id`); the upsert is a single
//! `INSERT ... ON CONFLICT DO UPDATE` statement, so concurrent writers for
//! the same project race at the database and the last writer wins.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::document::GeneratedDocument;
use crate::domain::foundation::{
    DocumentId, DomainError, ErrorCode, ProjectId, Timestamp,
};
use crate::ports::GeneratedDocumentRepository;

/// PostgreSQL implementation of the GeneratedDocumentRepository port.
#[derive(Clone)]
pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresDocumentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDocumentRepository")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresDocumentRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: uuid::Uuid,
    project_id: uuid::Uuid,
    content: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl DocumentRow {
    fn into_document(self) -> GeneratedDocument {
        GeneratedDocument::reconstitute(
            DocumentId::from_uuid(self.id),
            ProjectId::from_uuid(self.project_id),
            self.content,
            Timestamp::from_datetime(self.created_at),
            Timestamp::from_datetime(self.updated_at),
        )
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

#[async_trait]
impl GeneratedDocumentRepository for PostgresDocumentRepository {
    async fn upsert(
        &self,
        project_id: ProjectId,
        content: &str,
    ) -> Result<GeneratedDocument, DomainError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO generated_documents (id, project_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (project_id) DO UPDATE
            SET content = EXCLUDED.content,
                updated_at = NOW()
            RETURNING id, project_id, content, created_at, updated_at
            "#,
        )
        .bind(DocumentId::new().as_uuid())
        .bind(project_id.as_uuid())
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.into_document())
    }

    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<GeneratedDocument>, DomainError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, project_id, content, created_at, updated_at
            FROM generated_documents
            WHERE project_id = $1
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(DocumentRow::into_document))
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM generated_documents WHERE project_id = $1")
            .bind(project_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
