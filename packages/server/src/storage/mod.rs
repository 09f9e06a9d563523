mod content;

pub use content::ContentStore;

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("content item {0} not found")]
    NotFound(i32),

    /// A write matched no row even though the item still exists.
    #[error("unexplained write conflict on content item {0}")]
    Conflict(i32),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}
