//! HTTP adapters (axum routers, handlers, DTOs).

pub mod document;
