//! Terminal presentation of checkmarks.
pub mod form;
pub mod item;
pub mod list;

pub use form::{CheckmarkDraft, FormError, Submission};
pub use item::{DueStatus, ItemView};
pub use list::{Filter, ListStats, ListView, SortKey, SortOrder};

/// Day/month/year, the way dates are shown to the user.
pub const DATE_FORMAT: &str = "%d/%m/%Y";
