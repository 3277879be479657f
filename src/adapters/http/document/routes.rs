//! Route configuration for document endpoints.
//!
//! Configures the Axum router with document-related routes.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    export_document, generate_document, get_document, list_exports, purge_project_documents,
    save_document, DocumentAppState,
};

/// Creates the document router with all endpoints.
///
/// Routes:
/// - `POST /api/projects/:id/generate-doc` - Generate (or regenerate) the document
/// - `GET  /api/projects/:id/document` - Fetch the current document
/// - `PUT  /api/projects/:id/document` - Save edited content
/// - `POST /api/projects/:id/save-document` - Export content as PDF/DOCX
/// - `GET  /api/projects/:id/document/files` - List export records
/// - `DELETE /api/projects/:id/documents` - Cascade cleanup on project deletion
pub fn document_router() -> Router<DocumentAppState> {
    Router::new()
        .route("/api/projects/:id/generate-doc", post(generate_document))
        .route("/api/projects/:id/document", get(get_document))
        .route("/api/projects/:id/document", put(save_document))
        .route("/api/projects/:id/save-document", post(export_document))
        .route("/api/projects/:id/document/files", get(list_exports))
        .route("/api/projects/:id/documents", delete(purge_project_documents))
}
