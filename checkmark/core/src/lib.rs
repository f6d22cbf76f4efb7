//! Core domain model for Checkmark, shared by the server and its clients.
pub mod model;
pub mod validation;

pub use model::{CheckmarkItem, NewCheckmark, Priority, UnknownPriority};
pub use validation::{
    DESCRIPTION_MAX_LEN, TITLE_MAX_LEN, ValidationError, ValidationErrors, validate_content,
};
