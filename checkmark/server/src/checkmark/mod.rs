//! Checkmark items: persistence, service and HTTP handlers.

pub mod api;
pub mod repository;
pub mod service;

pub use api::{CheckmarkState, create_checkmark_router};
pub use repository::{CheckmarkRepository, SeaOrmCheckmarkRepository};
pub use service::CheckmarkService;

/// Error type for checkmark persistence and service operations.
///
/// Absence is not an error here: lookups return `Option` and deletes return
/// `bool`, so the only failure left is the store itself.
#[derive(Debug, thiserror::Error)]
pub enum CheckmarkError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
