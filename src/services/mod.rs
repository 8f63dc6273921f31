//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod export_service;
pub mod overlay_service;

pub use overlay_service::{render_export, render_preview, ExportRequest};
