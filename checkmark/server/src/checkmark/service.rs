use crate::checkmark::CheckmarkError;
use crate::checkmark::repository::CheckmarkRepository;
use checkmark_core::{CheckmarkItem, Priority};
use std::sync::Arc;

/// Application service over a [`CheckmarkRepository`].
///
/// Each operation delegates to the gateway unchanged. Request-level rules
/// (path/payload ID agreement, field validation) are checked by the handlers
/// before the service is called.
pub struct CheckmarkService {
    repository: Arc<dyn CheckmarkRepository>,
}

impl CheckmarkService {
    pub fn new(repository: Arc<dyn CheckmarkRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a checkmark by its ID.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no item has this ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_item_by_id(&self, id: i32) -> Result<Option<CheckmarkItem>, CheckmarkError> {
        self.repository.get_by_id(id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all_items(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        self.repository.get_all().await
    }

    /// Stores a new checkmark.
    ///
    /// # Arguments
    ///
    /// * `item` - The item to store. Its `id` and `created_at` are replaced.
    ///
    /// # Returns
    ///
    /// The same item, now carrying its assigned ID and creation time.
    #[tracing::instrument(skip(self))]
    pub async fn create_item(&self, mut item: CheckmarkItem) -> Result<CheckmarkItem, CheckmarkError> {
        self.repository.add(&mut item).await?;
        Ok(item)
    }

    /// Replaces an existing checkmark.
    ///
    /// # Returns
    ///
    /// The stored item after the update, or `Ok(None)` when it does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn update_item(
        &self,
        item: CheckmarkItem,
    ) -> Result<Option<CheckmarkItem>, CheckmarkError> {
        self.repository.update(item).await
    }

    /// Deletes a checkmark, returning whether it existed.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> Result<bool, CheckmarkError> {
        self.repository.delete(id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_completed_items(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        self.repository.get_completed().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_pending_items(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        self.repository.get_pending().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_items_by_priority(
        &self,
        priority: Priority,
    ) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        self.repository.get_by_priority(priority).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkmark::repository::MockCheckmarkRepository;
    use mockall::predicate::*;

    fn item(id: i32, title: &str) -> CheckmarkItem {
        CheckmarkItem {
            id,
            ..CheckmarkItem::new(title)
        }
    }

    fn service_with(repository: MockCheckmarkRepository) -> CheckmarkService {
        CheckmarkService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn get_item_by_id_returns_item_when_it_exists() {
        // Arrange
        let mut repository = MockCheckmarkRepository::new();
        repository
            .expect_get_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(item(id, "Test Item"))));
        let service = service_with(repository);

        // Act
        let result = service.get_item_by_id(1).await.unwrap();

        // Assert
        assert_eq!(result.map(|found| found.title), Some("Test Item".to_string()));
    }

    #[tokio::test]
    async fn get_item_by_id_returns_none_when_missing() {
        let mut repository = MockCheckmarkRepository::new();
        repository
            .expect_get_by_id()
            .with(eq(999))
            .times(1)
            .returning(|_| Ok(None));
        let service = service_with(repository);

        let result = service.get_item_by_id(999).await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn create_item_returns_the_item_the_repository_filled_in() {
        // Arrange
        let mut repository = MockCheckmarkRepository::new();
        repository
            .expect_add()
            .times(1)
            .returning(|item: &mut CheckmarkItem| {
                item.id = 42;
                Ok(())
            });
        let service = service_with(repository);
        let new_item = CheckmarkItem {
            description: "Test Description".to_string(),
            ..CheckmarkItem::new("Test Item")
        };

        // Act
        let created = service.create_item(new_item).await.unwrap();

        // Assert
        assert_eq!(created.id, 42);
        assert_eq!(created.title, "Test Item");
        assert_eq!(created.description, "Test Description");
        assert!(!created.is_completed);
        assert_eq!(created.updated_at, None);
    }

    #[tokio::test]
    async fn update_item_propagates_missing_item() {
        let mut repository = MockCheckmarkRepository::new();
        repository
            .expect_update()
            .withf(|item| item.id == 999)
            .times(1)
            .returning(|_| Ok(None));
        let service = service_with(repository);

        let result = service.update_item(item(999, "Ghost")).await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn delete_item_propagates_repository_result() {
        let mut repository = MockCheckmarkRepository::new();
        repository
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));
        repository
            .expect_delete()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(false));
        let service = service_with(repository);

        assert!(service.delete_item(1).await.unwrap());
        assert!(!service.delete_item(2).await.unwrap());
    }

    #[tokio::test]
    async fn filtered_views_delegate_to_repository() {
        let mut repository = MockCheckmarkRepository::new();
        repository
            .expect_get_completed()
            .times(1)
            .returning(|| Ok(vec![CheckmarkItem { is_completed: true, ..item(1, "Done") }]));
        repository
            .expect_get_pending()
            .times(1)
            .returning(|| Ok(vec![item(2, "Todo")]));
        repository
            .expect_get_by_priority()
            .with(eq(Priority::High))
            .times(1)
            .returning(|priority| {
                Ok(vec![CheckmarkItem {
                    priority,
                    ..item(3, "Urgent")
                }])
            });
        let service = service_with(repository);

        let completed = service.get_completed_items().await.unwrap();
        let pending = service.get_pending_items().await.unwrap();
        let high = service.get_items_by_priority(Priority::High).await.unwrap();

        assert_eq!(completed.len(), 1);
        assert!(completed[0].is_completed);
        assert_eq!(pending[0].id, 2);
        assert_eq!(high[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn storage_faults_propagate() {
        let mut repository = MockCheckmarkRepository::new();
        repository
            .expect_get_all()
            .times(1)
            .returning(|| Err(CheckmarkError::Database(sea_orm::DbErr::Custom("boom".to_string()))));
        let service = service_with(repository);

        let result = service.get_all_items().await;

        assert!(matches!(result, Err(CheckmarkError::Database(_))));
    }
}
