use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::content_item;
use crate::error::AppError;

/// Request body for create and update.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ContentItemRequest {
    /// Raw JSON document, sent as a string and parsed server-side.
    #[schema(example = "{\"title\":\"Hello\",\"blocks\":[]}")]
    pub payload: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContentItemResponse {
    #[schema(example = 1)]
    pub id: i32,
    /// The stored document, returned as a JSON value.
    #[schema(value_type = Object)]
    pub payload: Value,
    #[schema(example = "2025-09-01T08:00:00Z")]
    pub created_at: DateTime<Utc>,
    #[schema(example = "2025-09-01T08:05:00Z")]
    pub updated_at: DateTime<Utc>,
}

impl From<content_item::Model> for ContentItemResponse {
    fn from(m: content_item::Model) -> Self {
        Self {
            id: m.id,
            payload: m.payload,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Parse a raw payload string. Syntax is the only thing checked.
pub fn parse_payload(raw: &str) -> Result<Value, AppError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::warn!(error = %e, "Invalid JSON payload provided");
        AppError::InvalidPayload
    })
}
