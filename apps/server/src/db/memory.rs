//! In-memory `ItemStore` implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    db::traits::ItemStore,
    models::{Item, ItemId},
    Error, Result,
};

/// Vec-backed item store. Contents live only as long as the process.
///
/// Every operation holds the lock for its whole check-then-act sequence, so
/// concurrent creates with the same id cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(items: &[Item], id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: ItemId) -> Result<Item> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(Error::item_not_found)
    }

    async fn insert(&self, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;
        if position(&items, item.id).is_some() {
            return Err(Error::item_id_exists());
        }
        items.push(item.clone());
        Ok(item)
    }

    async fn replace(&self, id: ItemId, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;
        let idx = position(&items, id).ok_or_else(Error::item_not_found)?;
        items[idx] = item.clone();
        Ok(item)
    }

    async fn remove(&self, id: ItemId) -> Result<()> {
        let mut items = self.items.write().await;
        let idx = position(&items, id).ok_or_else(Error::item_not_found)?;
        items.remove(idx);
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.items.read().await.len())
    }
}
