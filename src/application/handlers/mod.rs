//! Application command/query handlers, grouped by subsystem.

pub mod document;
