use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "checkmark_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_completed: bool,
    pub due_date: Option<Date>,
    pub priority: PriorityLevel,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

/// Priority as persisted: the level's name in a text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PriorityLevel {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
