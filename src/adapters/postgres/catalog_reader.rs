//! PostgreSQL implementation of CatalogReader.
//!
//! Reads project records owned by the catalog subsystem, resolving the
//! category name via a join. The document core never writes these tables.

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use crate::domain::catalog::{AcademicLevel, ProjectDescriptor};
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::ports::CatalogReader;

/// PostgreSQL implementation of the CatalogReader port.
#[derive(Clone)]
pub struct PostgresCatalogReader {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresCatalogReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresCatalogReader")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresCatalogReader {
    /// Creates a new reader instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: uuid::Uuid,
    title: String,
    description: String,
    category_name: Option<String>,
    level: Option<String>,
    institution: Option<String>,
}

impl ProjectRow {
    fn into_descriptor(self) -> Result<ProjectDescriptor, DomainError> {
        let mut descriptor = ProjectDescriptor::new(
            ProjectId::from_uuid(self.id),
            self.title,
            self.description,
        )
        .map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid project row: {}", e))
        })?;

        if let Some(category) = self.category_name {
            descriptor = descriptor.with_category(category);
        }
        if let Some(level) = self.level.as_deref() {
            let level = AcademicLevel::from_str(level).map_err(|e| {
                DomainError::new(ErrorCode::InvalidFormat, format!("Invalid level: {}", e))
            })?;
            descriptor = descriptor.with_level(level);
        }
        if let Some(institution) = self.institution {
            descriptor = descriptor.with_institution(institution);
        }

        Ok(descriptor)
    }
}

#[async_trait]
impl CatalogReader for PostgresCatalogReader {
    async fn find_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<ProjectDescriptor>, DomainError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                p.id, p.title, p.description,
                c.name AS category_name,
                p.level, p.institution
            FROM projects p
            LEFT JOIN project_categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
        })?;

        row.map(ProjectRow::into_descriptor).transpose()
    }
}
