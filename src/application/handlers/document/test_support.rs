//! Shared in-memory port implementations for handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::catalog::ProjectDescriptor;
use crate::domain::document::{ExportedFile, GeneratedDocument};
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::ports::{
    CatalogReader, DocumentExportService, ExportError, ExportFileStorage, ExportedFileRepository,
    FilePath, GeneratedDocumentRepository, StorageError,
};

/// Catalog reader over a fixed set of projects.
pub struct StaticCatalogReader {
    projects: Vec<ProjectDescriptor>,
}

impl StaticCatalogReader {
    pub fn empty() -> Self {
        Self { projects: Vec::new() }
    }

    pub fn with_project(project: ProjectDescriptor) -> Self {
        Self {
            projects: vec![project],
        }
    }
}

#[async_trait]
impl CatalogReader for StaticCatalogReader {
    async fn find_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<ProjectDescriptor>, DomainError> {
        Ok(self.projects.iter().find(|p| p.id() == project_id).cloned())
    }
}

/// Document repository backed by a HashMap, mirroring upsert semantics.
pub struct InMemoryDocumentRepository {
    documents: Mutex<HashMap<ProjectId, GeneratedDocument>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl GeneratedDocumentRepository for InMemoryDocumentRepository {
    async fn upsert(
        &self,
        project_id: ProjectId,
        content: &str,
    ) -> Result<GeneratedDocument, DomainError> {
        let mut documents = self.documents.lock().unwrap();

        let document = match documents.get_mut(&project_id) {
            Some(existing) => {
                existing.replace_content(content).map_err(|e| {
                    DomainError::new(ErrorCode::ValidationFailed, e.to_string())
                })?;
                existing.clone()
            }
            None => {
                let created = GeneratedDocument::new(project_id, content).map_err(|e| {
                    DomainError::new(ErrorCode::ValidationFailed, e.to_string())
                })?;
                documents.insert(project_id, created.clone());
                created
            }
        };

        Ok(document)
    }

    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<GeneratedDocument>, DomainError> {
        Ok(self.documents.lock().unwrap().get(&project_id).cloned())
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> Result<(), DomainError> {
        self.documents.lock().unwrap().remove(&project_id);
        Ok(())
    }
}

/// Append-only exported file repository backed by a Vec.
pub struct InMemoryExportedFileRepository {
    files: Mutex<Vec<ExportedFile>>,
}

impl InMemoryExportedFileRepository {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl ExportedFileRepository for InMemoryExportedFileRepository {
    async fn insert(&self, file: &ExportedFile) -> Result<(), DomainError> {
        self.files.lock().unwrap().push(file.clone());
        Ok(())
    }

    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<ExportedFile>, DomainError> {
        let mut files: Vec<ExportedFile> = self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.project_id() == project_id)
            .cloned()
            .collect();
        files.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(files)
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> Result<u64, DomainError> {
        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|f| f.project_id() != project_id);
        Ok((before - files.len()) as u64)
    }
}

/// Export service returning fixed bytes, or failing on demand.
pub struct FixedExportService {
    pdf_bytes: Option<Vec<u8>>,
    docx_bytes: Option<Vec<u8>>,
}

impl FixedExportService {
    pub fn new() -> Self {
        Self {
            pdf_bytes: Some(b"%PDF-1.4 fixture".to_vec()),
            docx_bytes: Some(b"PK docx fixture".to_vec()),
        }
    }

    pub fn failing() -> Self {
        Self {
            pdf_bytes: None,
            docx_bytes: None,
        }
    }
}

#[async_trait]
impl DocumentExportService for FixedExportService {
    async fn to_pdf(&self, _html: &str) -> Result<Vec<u8>, ExportError> {
        self.pdf_bytes
            .clone()
            .ok_or_else(|| ExportError::pdf_failed("engine crashed"))
    }

    async fn to_docx(&self, _html: &str) -> Result<Vec<u8>, ExportError> {
        self.docx_bytes
            .clone()
            .ok_or_else(|| ExportError::docx_failed("engine crashed"))
    }

    async fn is_available(&self) -> bool {
        self.pdf_bytes.is_some()
    }
}

/// File storage backed by a HashMap keyed on (project, name).
pub struct InMemoryExportStorage {
    files: Mutex<HashMap<(ProjectId, String), Vec<u8>>>,
}

impl InMemoryExportStorage {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl ExportFileStorage for InMemoryExportStorage {
    async fn write(
        &self,
        project_id: ProjectId,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<FilePath, StorageError> {
        self.files
            .lock()
            .unwrap()
            .insert((project_id, file_name.to_string()), bytes.to_vec());
        Ok(self.file_path(project_id, file_name))
    }

    async fn exists(&self, project_id: ProjectId, file_name: &str) -> Result<bool, StorageError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .contains_key(&(project_id, file_name.to_string())))
    }

    async fn read(&self, project_id: ProjectId, file_name: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .lock()
            .unwrap()
            .get(&(project_id, file_name.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::not_found(file_name))
    }

    async fn remove_project_dir(&self, project_id: ProjectId) -> Result<(), StorageError> {
        self.files
            .lock()
            .unwrap()
            .retain(|(pid, _), _| *pid != project_id);
        Ok(())
    }

    fn file_path(&self, project_id: ProjectId, file_name: &str) -> FilePath {
        FilePath::new(format!(
            "uploads/projects/{}/documents/{}",
            project_id, file_name
        ))
    }
}
