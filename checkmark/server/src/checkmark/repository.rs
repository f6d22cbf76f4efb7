use crate::checkmark::CheckmarkError;
use crate::entities::checkmark_item::{self, PriorityLevel};
use async_trait::async_trait;
use checkmark_core::{CheckmarkItem, Priority};
use chrono::Utc;
use sea_orm::*;

/// Storage gateway for checkmark items.
///
/// The gateway is the only place identifiers and timestamps are assigned.
/// Every mutating call is committed before it returns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckmarkRepository: Send + Sync {
    /// Looks up an item, `None` when the ID is unknown.
    async fn get_by_id(&self, id: i32) -> Result<Option<CheckmarkItem>, CheckmarkError>;

    /// Returns every stored item in the store's native order.
    async fn get_all(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError>;

    /// Persists a new item.
    ///
    /// The generated ID and creation time are written back into `item`.
    async fn add(&self, item: &mut CheckmarkItem) -> Result<(), CheckmarkError>;

    /// Replaces the stored fields of an existing item and stamps `updated_at`.
    ///
    /// Returns `None` when no item with `item.id` exists.
    async fn update(&self, item: CheckmarkItem) -> Result<Option<CheckmarkItem>, CheckmarkError>;

    /// Removes an item, returning whether anything was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CheckmarkError>;

    async fn exists(&self, id: i32) -> Result<bool, CheckmarkError>;

    async fn get_completed(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError>;

    async fn get_pending(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError>;

    async fn get_by_priority(
        &self,
        priority: Priority,
    ) -> Result<Vec<CheckmarkItem>, CheckmarkError>;
}

impl From<Priority> for PriorityLevel {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityLevel::Low,
            Priority::Medium => PriorityLevel::Medium,
            Priority::High => PriorityLevel::High,
        }
    }
}

impl From<PriorityLevel> for Priority {
    fn from(level: PriorityLevel) -> Self {
        match level {
            PriorityLevel::Low => Priority::Low,
            PriorityLevel::Medium => Priority::Medium,
            PriorityLevel::High => Priority::High,
        }
    }
}

impl From<checkmark_item::Model> for CheckmarkItem {
    fn from(model: checkmark_item::Model) -> Self {
        CheckmarkItem {
            id: model.id,
            title: model.title,
            description: model.description,
            is_completed: model.is_completed,
            due_date: model.due_date,
            priority: model.priority.into(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// [`CheckmarkRepository`] backed by a sea-orm connection.
#[derive(Clone, Debug)]
pub struct SeaOrmCheckmarkRepository {
    db: DatabaseConnection,
}

impl SeaOrmCheckmarkRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_where(
        &self,
        condition: Condition,
    ) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        let items = checkmark_item::Entity::find()
            .filter(condition)
            .all(&self.db)
            .await?
            .into_iter()
            .map(CheckmarkItem::from)
            .collect();
        Ok(items)
    }
}

#[async_trait]
impl CheckmarkRepository for SeaOrmCheckmarkRepository {
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Result<Option<CheckmarkItem>, CheckmarkError> {
        let model = checkmark_item::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(CheckmarkItem::from))
    }

    #[tracing::instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        self.find_where(Condition::all()).await
    }

    #[tracing::instrument(skip(self, item), fields(title = %item.title))]
    async fn add(&self, item: &mut CheckmarkItem) -> Result<(), CheckmarkError> {
        let active_model = checkmark_item::ActiveModel {
            title: ActiveValue::Set(item.title.clone()),
            description: ActiveValue::Set(item.description.clone()),
            is_completed: ActiveValue::Set(item.is_completed),
            due_date: ActiveValue::Set(item.due_date),
            priority: ActiveValue::Set(item.priority.into()),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        };
        let created_model = active_model.insert(&self.db).await?;

        item.id = created_model.id;
        item.created_at = created_model.created_at;
        item.updated_at = created_model.updated_at;
        tracing::debug!("Created checkmark with ID {}", item.id);
        Ok(())
    }

    #[tracing::instrument(skip(self, item), fields(id = item.id))]
    async fn update(&self, item: CheckmarkItem) -> Result<Option<CheckmarkItem>, CheckmarkError> {
        let Some(existing) = checkmark_item::Entity::find_by_id(item.id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        // Never move updated_at behind created_at or a previous update.
        let floor = existing.updated_at.unwrap_or(existing.created_at);
        let updated_at = Utc::now().max(floor);

        let mut active_model: checkmark_item::ActiveModel = existing.into();
        active_model.title = ActiveValue::Set(item.title);
        active_model.description = ActiveValue::Set(item.description);
        active_model.is_completed = ActiveValue::Set(item.is_completed);
        active_model.due_date = ActiveValue::Set(item.due_date);
        active_model.priority = ActiveValue::Set(item.priority.into());
        active_model.updated_at = ActiveValue::Set(Some(updated_at));

        match active_model.update(&self.db).await {
            Ok(updated_model) => Ok(Some(CheckmarkItem::from(updated_model))),
            // Deleted between the lookup and the write.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<bool, CheckmarkError> {
        let result = checkmark_item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: i32) -> Result<bool, CheckmarkError> {
        let count = checkmark_item::Entity::find_by_id(id)
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn get_completed(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        self.find_where(Condition::all().add(checkmark_item::Column::IsCompleted.eq(true)))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_pending(&self) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        self.find_where(Condition::all().add(checkmark_item::Column::IsCompleted.eq(false)))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_priority(
        &self,
        priority: Priority,
    ) -> Result<Vec<CheckmarkItem>, CheckmarkError> {
        let level = PriorityLevel::from(priority);
        self.find_where(Condition::all().add(checkmark_item::Column::Priority.eq(level)))
            .await
    }
}
