//! ProjectAid - Academic Project Marketplace Backend
//!
//! This crate implements the document synthesis and export pipeline:
//! template or remote generation of full academic project documents,
//! per-project persistence of the editable result, and on-demand export
//! to PDF/DOCX artifacts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
