//! HTTP handlers for document endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. Status mapping lives here; the application layer knows nothing
//! about HTTP.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::document::{
    ExportDocumentCommand, ExportDocumentError, ExportDocumentHandler, GenerateDocumentCommand,
    GenerateDocumentError, GenerateDocumentHandler, GetDocumentError, GetDocumentHandler,
    GetDocumentQuery, ListExportsHandler, ListExportsQuery, PurgeProjectDocumentsCommand,
    PurgeProjectDocumentsHandler, SaveDocumentCommand, SaveDocumentError, SaveDocumentHandler,
};
use crate::domain::document::ExportFormat;
use crate::domain::foundation::{ProjectId, UserId};
use crate::ports::{
    CatalogReader, DocumentExportService, DocumentGenerator, ExportFileStorage,
    ExportedFileRepository, GeneratedDocumentRepository,
};

use super::dto::{
    DocumentCommandResponse, DocumentResponse, ErrorResponse, ExportCommandResponse,
    ExportDocumentRequest, ExportListResponse, ExportedFileResponse, PurgeResponse,
    SaveDocumentRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all document dependencies.
#[derive(Clone)]
pub struct DocumentAppState {
    pub catalog: Arc<dyn CatalogReader>,
    pub generator: Arc<dyn DocumentGenerator>,
    pub documents: Arc<dyn GeneratedDocumentRepository>,
    pub exports: Arc<dyn ExportedFileRepository>,
    pub export_service: Arc<dyn DocumentExportService>,
    pub file_storage: Arc<dyn ExportFileStorage>,
}

impl DocumentAppState {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        generator: Arc<dyn DocumentGenerator>,
        documents: Arc<dyn GeneratedDocumentRepository>,
        exports: Arc<dyn ExportedFileRepository>,
        export_service: Arc<dyn DocumentExportService>,
        file_storage: Arc<dyn ExportFileStorage>,
    ) -> Self {
        Self {
            catalog,
            generator,
            documents,
            exports,
            export_service,
            file_storage,
        }
    }

    pub fn generate_document_handler(&self) -> GenerateDocumentHandler {
        GenerateDocumentHandler::new(
            self.catalog.clone(),
            self.generator.clone(),
            self.documents.clone(),
        )
    }

    pub fn get_document_handler(&self) -> GetDocumentHandler {
        GetDocumentHandler::new(self.documents.clone())
    }

    pub fn save_document_handler(&self) -> SaveDocumentHandler {
        SaveDocumentHandler::new(self.catalog.clone(), self.documents.clone())
    }

    pub fn export_document_handler(&self) -> ExportDocumentHandler {
        ExportDocumentHandler::new(
            self.catalog.clone(),
            self.export_service.clone(),
            self.file_storage.clone(),
            self.exports.clone(),
        )
    }

    pub fn list_exports_handler(&self) -> ListExportsHandler {
        ListExportsHandler::new(self.exports.clone(), self.file_storage.clone())
    }

    pub fn purge_handler(&self) -> PurgeProjectDocumentsHandler {
        PurgeProjectDocumentsHandler::new(
            self.documents.clone(),
            self.exports.clone(),
            self.file_storage.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// Authenticated user context extracted from the request.
///
/// Authentication itself is the outer layer's concern; by the time a
/// request reaches this service the gateway has resolved the user and
/// forwarded it in the `X-User-Id` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::bad_request("Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(AuthenticationRequired)?;

            Ok(AuthenticatedUser { user_id })
        })
    }
}

fn parse_project_id(raw: &str) -> Result<ProjectId, DocumentApiError> {
    raw.parse()
        .map_err(|_| DocumentApiError::BadRequest("Invalid project ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/projects/:id/generate-doc - Generate (or regenerate) the document
pub async fn generate_document(
    State(state): State<DocumentAppState>,
    Path(project_id): Path<String>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, DocumentApiError> {
    let project_id = parse_project_id(&project_id)?;

    let handler = state.generate_document_handler();
    let result = handler.handle(GenerateDocumentCommand { project_id }).await?;

    let response = DocumentCommandResponse {
        message: "Document generated successfully".to_string(),
        document: DocumentResponse::from(result.document),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/projects/:id/document - Fetch the current document
pub async fn get_document(
    State(state): State<DocumentAppState>,
    Path(project_id): Path<String>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, DocumentApiError> {
    let project_id = parse_project_id(&project_id)?;

    let handler = state.get_document_handler();
    let document = handler.handle(GetDocumentQuery { project_id }).await?;

    Ok((StatusCode::OK, Json(DocumentResponse::from(document))))
}

/// PUT /api/projects/:id/document - Save edited content
pub async fn save_document(
    State(state): State<DocumentAppState>,
    Path(project_id): Path<String>,
    _user: AuthenticatedUser,
    Json(request): Json<SaveDocumentRequest>,
) -> Result<impl IntoResponse, DocumentApiError> {
    let project_id = parse_project_id(&project_id)?;

    let handler = state.save_document_handler();
    let document = handler
        .handle(SaveDocumentCommand {
            project_id,
            content: request.content,
        })
        .await?;

    let response = DocumentCommandResponse {
        message: "Document saved successfully".to_string(),
        document: DocumentResponse::from(document),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/projects/:id/save-document - Export content as PDF/DOCX
pub async fn export_document(
    State(state): State<DocumentAppState>,
    Path(project_id): Path<String>,
    user: AuthenticatedUser,
    Json(request): Json<ExportDocumentRequest>,
) -> Result<impl IntoResponse, DocumentApiError> {
    let project_id = parse_project_id(&project_id)?;

    let format = ExportFormat::from_str(&request.format).map_err(|_| {
        DocumentApiError::BadRequest("Invalid format. Supported formats are pdf and docx".to_string())
    })?;

    let handler = state.export_document_handler();
    let file = handler
        .handle(ExportDocumentCommand {
            project_id,
            content: request.content,
            format,
            requested_by: Some(user.user_id),
        })
        .await?;

    let response = ExportCommandResponse {
        message: "Document generated and saved successfully".to_string(),
        file: ExportedFileResponse::from(file),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/projects/:id/document/files - List export records
pub async fn list_exports(
    State(state): State<DocumentAppState>,
    Path(project_id): Path<String>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, DocumentApiError> {
    let project_id = parse_project_id(&project_id)?;

    let handler = state.list_exports_handler();
    let files = handler
        .handle(ListExportsQuery { project_id })
        .await
        .map_err(|e| DocumentApiError::Internal(e.to_string()))?;

    let response = ExportListResponse {
        files: files.into_iter().map(ExportedFileResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// DELETE /api/projects/:id/documents - Cascade cleanup on project deletion
pub async fn purge_project_documents(
    State(state): State<DocumentAppState>,
    Path(project_id): Path<String>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, DocumentApiError> {
    let project_id = parse_project_id(&project_id)?;

    let handler = state.purge_handler();
    let result = handler
        .handle(PurgeProjectDocumentsCommand { project_id })
        .await
        .map_err(|e| DocumentApiError::Internal(e.to_string()))?;

    let response = PurgeResponse {
        message: "Project documents removed".to_string(),
        exported_files_removed: result.exported_files_removed,
    };

    Ok((StatusCode::OK, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum DocumentApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<GenerateDocumentError> for DocumentApiError {
    fn from(err: GenerateDocumentError) -> Self {
        match err {
            GenerateDocumentError::ProjectNotFound(id) => {
                DocumentApiError::NotFound(format!("Project not found: {}", id))
            }
            GenerateDocumentError::GenerationFailed(msg) => DocumentApiError::Internal(msg),
            GenerateDocumentError::Domain(e) => DocumentApiError::Internal(e.to_string()),
        }
    }
}

impl From<GetDocumentError> for DocumentApiError {
    fn from(err: GetDocumentError) -> Self {
        match err {
            GetDocumentError::DocumentNotFound(id) => {
                DocumentApiError::NotFound(format!("Document not found for project: {}", id))
            }
            GetDocumentError::Domain(e) => DocumentApiError::Internal(e.to_string()),
        }
    }
}

impl From<SaveDocumentError> for DocumentApiError {
    fn from(err: SaveDocumentError) -> Self {
        match err {
            SaveDocumentError::EmptyContent => {
                DocumentApiError::BadRequest("Content is required".to_string())
            }
            SaveDocumentError::ProjectNotFound(id) => {
                DocumentApiError::NotFound(format!("Project not found: {}", id))
            }
            SaveDocumentError::Domain(e) => DocumentApiError::Internal(e.to_string()),
        }
    }
}

impl From<ExportDocumentError> for DocumentApiError {
    fn from(err: ExportDocumentError) -> Self {
        match err {
            ExportDocumentError::EmptyContent => {
                DocumentApiError::BadRequest("Content is required".to_string())
            }
            ExportDocumentError::ProjectNotFound(id) => {
                DocumentApiError::NotFound(format!("Project not found: {}", id))
            }
            ExportDocumentError::RenderingFailed(msg) | ExportDocumentError::StorageFailed(msg) => {
                DocumentApiError::Internal(msg)
            }
            ExportDocumentError::Domain(e) => DocumentApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for DocumentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DocumentApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DocumentApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Resource", &msg))
            }
            DocumentApiError::Internal(msg) => {
                tracing::error!(error = %msg, "document API internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
