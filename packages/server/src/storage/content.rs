use sea_orm::*;
use serde_json::Value;
use tracing::warn;

use crate::entity::content_item;

use super::StoreError;

/// Persistence for content items. Every call completes against the database
/// before returning.
#[derive(Clone)]
pub struct ContentStore {
    db: DatabaseConnection,
}

impl ContentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All items in primary-key order.
    pub async fn list_all(&self) -> Result<Vec<content_item::Model>, StoreError> {
        let items = content_item::Entity::find()
            .order_by_asc(content_item::Column::Id)
            .all(&self.db)
            .await?;
        Ok(items)
    }

    pub async fn get(&self, id: i32) -> Result<Option<content_item::Model>, StoreError> {
        let item = content_item::Entity::find_by_id(id).one(&self.db).await?;
        Ok(item)
    }

    pub async fn insert(&self, payload: Value) -> Result<content_item::Model, StoreError> {
        let now = chrono::Utc::now();
        let item = content_item::ActiveModel {
            payload: Set(payload),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(item.insert(&self.db).await?)
    }

    /// Replace the payload of an existing item and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does. A write
    /// that matches no row is treated as a lost race with a delete: existence
    /// is re-checked and `NotFound` is returned if the row is gone.
    pub async fn update(
        &self,
        id: i32,
        payload: Value,
    ) -> Result<content_item::Model, StoreError> {
        let current = self.get(id).await?.ok_or(StoreError::NotFound(id))?;
        let updated_at = Ord::max(chrono::Utc::now(), current.updated_at);

        let mut item: content_item::ActiveModel = current.into();
        item.payload = Set(payload);
        item.updated_at = Set(updated_at);

        match item.update(&self.db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                if self.exists(id).await? {
                    warn!(id, "Update matched no row although the item exists");
                    Err(StoreError::Conflict(id))
                } else {
                    Err(StoreError::NotFound(id))
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let res = content_item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.get(id).await?.is_some())
    }
}
