//! Port traits: the contracts adapters implement and the application
//! layer depends on.

mod catalog_reader;
mod completion_client;
mod document_generator;
mod document_repository;
mod export_service;
mod exported_file_repository;
mod file_storage;

pub use catalog_reader::CatalogReader;
pub use completion_client::{
    ClientInfo, CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
    FinishReason,
};
pub use document_generator::{DocumentGenerator, GenerationError, GeneratorInfo};
pub use document_repository::GeneratedDocumentRepository;
pub use export_service::{DocumentExportService, ExportError};
pub use exported_file_repository::ExportedFileRepository;
pub use file_storage::{ExportFileStorage, FilePath, StorageError};
