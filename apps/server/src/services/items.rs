//! Item service - business logic for item operations

use crate::{
    db::ItemStore,
    models::{Item, ItemId},
    Result,
};
use std::sync::Arc;

pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub async fn list_items(&self) -> Result<Vec<Item>> {
        self.store.list().await
    }

    pub async fn get_item(&self, id: ItemId) -> Result<Item> {
        self.store.get(id).await
    }

    /// Store a new item. Fails with `Conflict` when the id is already in use.
    ///
    /// No validation beyond that: negative prices and empty names are accepted.
    pub async fn create_item(&self, item: Item) -> Result<Item> {
        let item_id = item.id;
        let created = self.store.insert(item).await?;
        tracing::info!(item_id, "Item created");
        Ok(created)
    }

    /// Replace the item stored under `id` with `item`, keeping its position.
    ///
    /// `item.id` is not reconciled with `id`: a mismatching payload is stored
    /// as-is and can duplicate another item's id.
    pub async fn update_item(&self, id: ItemId, item: Item) -> Result<Item> {
        if item.id != id {
            tracing::warn!(
                path_id = id,
                payload_id = item.id,
                "Update payload id differs from path id; storing payload as given"
            );
        }
        let updated = self.store.replace(id, item).await?;
        tracing::info!(item_id = id, "Item updated");
        Ok(updated)
    }

    pub async fn delete_item(&self, id: ItemId) -> Result<()> {
        self.store.remove(id).await?;
        tracing::info!(item_id = id, "Item deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<usize> {
        self.store.count().await
    }
}
