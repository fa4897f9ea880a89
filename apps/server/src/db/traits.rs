//! Storage abstraction for items

use async_trait::async_trait;

use crate::{
    models::{Item, ItemId},
    Result,
};

/// Ordered item storage addressed by caller-supplied identifiers.
///
/// Implementations keep insertion order. Lookups return the first item whose
/// `id` matches.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in insertion order.
    async fn list(&self) -> Result<Vec<Item>>;

    async fn get(&self, id: ItemId) -> Result<Item>;

    /// Append `item`, failing with `Conflict` if its id is already taken.
    async fn insert(&self, item: Item) -> Result<Item>;

    /// Overwrite the slot holding `id` with `item`.
    ///
    /// The replacement is stored as given, even when `item.id != id`.
    async fn replace(&self, id: ItemId, item: Item) -> Result<Item>;

    async fn remove(&self, id: ItemId) -> Result<()>;

    async fn count(&self) -> Result<usize>;
}
