#![allow(dead_code)]

use chrono::NaiveDate;
use checkmark_server::entities::checkmark_item::{self, PriorityLevel};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectOptions, Database, DatabaseConnection};

/// Opens a fresh in-memory SQLite database with all migrations applied.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    // A single pooled connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Test helper to insert a checkmark row directly, bypassing the repository.
pub async fn insert_item(
    db: &DatabaseConnection,
    title: &str,
    is_completed: bool,
    priority: PriorityLevel,
) -> checkmark_item::Model {
    let active_model = checkmark_item::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(String::new()),
        is_completed: ActiveValue::Set(is_completed),
        due_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2030, 1, 15)),
        priority: ActiveValue::Set(priority),
        created_at: ActiveValue::Set(chrono::Utc::now()),
        updated_at: ActiveValue::Set(None),
        ..Default::default()
    };
    active_model
        .insert(db)
        .await
        .expect("Failed to insert checkmark")
}

/// Inserts a mix of completed and pending items across every priority.
pub async fn seed_items(db: &DatabaseConnection) -> Vec<checkmark_item::Model> {
    vec![
        insert_item(db, "Buy groceries", false, PriorityLevel::Medium).await,
        insert_item(db, "File taxes", true, PriorityLevel::High).await,
        insert_item(db, "Water plants", false, PriorityLevel::Low).await,
        insert_item(db, "Fix the bike", false, PriorityLevel::High).await,
        insert_item(db, "Call grandma", true, PriorityLevel::Low).await,
    ]
}
