//! Export adapters: the Pandoc conversion service.

mod pandoc_export_service;

pub use pandoc_export_service::PandocExportService;
