pub use super::checkmark_item::Entity as CheckmarkItem;
