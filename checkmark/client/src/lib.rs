//! Client side of Checkmark: HTTP access to the API and the views that
//! present its data.
pub mod api;
pub mod commands;
pub mod view;

pub use api::{CheckmarkApi, ClientError};
