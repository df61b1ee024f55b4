//! Item Service - Business logic layer

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, validate_item_payload};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Takes raw request payloads, validates them, and drives the repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate the payload and create an item from it
    #[instrument(skip(self, payload))]
    pub async fn create_item(&self, payload: Option<Value>) -> ItemResult<Item> {
        let input = validate_item_payload(payload.as_ref())?;
        self.repository.create(input).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: u64) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// List all items in insertion order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Replace an item's name and description.
    ///
    /// A missing item is reported before the payload is looked at.
    #[instrument(skip(self, payload))]
    pub async fn update_item(&self, id: u64, payload: Option<Value>) -> ItemResult<Item> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ItemError::NotFound(id));
        }

        let input = validate_item_payload(payload.as_ref())?;
        self.repository.update(id, input).await
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: u64) -> ItemResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ItemError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemInput, NAME_REQUIRED, NO_DATA_PROVIDED};
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;
    use serde_json::json;

    fn widget(id: u64) -> Item {
        Item::new(id, ItemInput::new("Widget", None))
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload_without_touching_store() {
        // No expectations: any repository call fails the test
        let service = ItemService::new(MockItemRepository::new());

        let result = service.create_item(Some(json!({"description": "x"}))).await;
        assert_eq!(result, Err(ItemError::Validation(NAME_REQUIRED.to_string())));

        let result = service.create_item(None).await;
        assert_eq!(result, Err(ItemError::Validation(NO_DATA_PROVIDED.to_string())));
    }

    #[tokio::test]
    async fn test_create_passes_validated_input_through() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_create()
            .with(eq(ItemInput::new(" A ", Some("d"))))
            .times(1)
            .returning(|input| Ok(Item::new(1, input)));

        let service = ItemService::new(mock_repo);
        let item = service
            .create_item(Some(json!({"name": " A ", "description": "d"})))
            .await
            .unwrap();
        assert_eq!(item.name, "A");
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42u64))
            .returning(|_| Ok(None));

        let service = ItemService::new(mock_repo);
        assert_eq!(service.get_item(42).await, Err(ItemError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_update_missing_item_wins_over_invalid_payload() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(999u64))
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ItemService::new(mock_repo);
        let result = service.update_item(999, Some(json!({}))).await;
        assert_eq!(result, Err(ItemError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_update_existing_item_validates_before_writing() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1u64))
            .returning(|id| Ok(Some(widget(id))));
        mock_repo.expect_update().never();

        let service = ItemService::new(mock_repo);
        let result = service
            .update_item(1, Some(json!({"description": "no name"})))
            .await;
        assert_eq!(result, Err(ItemError::Validation(NAME_REQUIRED.to_string())));
    }

    #[tokio::test]
    async fn test_update_existing_item() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1u64))
            .returning(|id| Ok(Some(widget(id))));
        mock_repo
            .expect_update()
            .with(eq(1u64), eq(ItemInput::new("Gadget", None)))
            .times(1)
            .returning(|id, input| Ok(Item::new(id, input)));

        let service = ItemService::new(mock_repo);
        let item = service
            .update_item(1, Some(json!({"name": "Gadget"})))
            .await
            .unwrap();
        assert_eq!(item.name, "Gadget");
        assert_eq!(item.description, "");
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(5u64))
            .returning(|_| Ok(false));

        let service = ItemService::new(mock_repo);
        assert_eq!(service.delete_item(5).await, Err(ItemError::NotFound(5)));
    }
}
