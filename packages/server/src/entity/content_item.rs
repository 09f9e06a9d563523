use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A stored content block wrapping an arbitrary JSON document.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "content_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Opaque document. Stored as `jsonb` or as serialized text depending on
    /// the backend, see `database::PayloadEncoding`.
    #[sea_orm(column_type = "JsonBinary")]
    pub payload: Json,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
