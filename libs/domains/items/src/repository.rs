use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};

/// Repository trait for Item storage
///
/// Implementations own every item and the id counter. Callers hand in
/// validated [`ItemInput`]; trimming is applied on write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Assign the next id and append a new item
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>>;

    /// All items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Overwrite name and description in place
    async fn update(&self, id: u64, input: ItemInput) -> ItemResult<Item>;

    /// Remove an item; `false` when there was nothing to remove
    async fn delete(&self, id: u64) -> ItemResult<bool>;
}

#[derive(Debug)]
struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemStore {
    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// Process-local item store.
///
/// The collection and the id counter sit behind one lock, so an id is read,
/// bumped and used in the same critical section. Clones share the store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<ItemStore>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let item = Item::new(store.next_id, input);
        store.next_id += 1;
        store.items.push(item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.iter().find(|item| item.id == id).cloned())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.items.clone())
    }

    async fn update(&self, id: u64, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let index = store.position(id).ok_or(ItemError::NotFound(id))?;
        let item = &mut store.items[index];
        item.apply_update(input);
        let updated = item.clone();

        tracing::info!(item_id = id, "Updated item");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> ItemResult<bool> {
        let mut store = self.store.write().await;

        match store.position(id) {
            Some(index) => {
                store.items.remove(index);
                tracing::info!(item_id = id, "Deleted item");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
