//! HTTP adapter for the document API.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AuthenticatedUser, DocumentApiError, DocumentAppState};
pub use routes::document_router;
