//! Steps shared by the `checkmark` subcommands. Failures carry one generic
//! message for the user; the underlying error stays in the chain for logs.
use checkmark_core::CheckmarkItem;

use crate::CheckmarkApi;

pub const LOAD_ERROR: &str = "Failed to load checkmarks. Please try again.";
pub const SAVE_ERROR: &str = "Failed to save the checkmark. Please try again.";
pub const TOGGLE_ERROR: &str = "Failed to update the checkmark status. Please try again.";
pub const DELETE_ERROR: &str = "Failed to delete the checkmark. Please try again.";

/// Fetches one item. A missing item reads the same as any other failure.
pub async fn fetch_item(api: &CheckmarkApi, id: i32) -> anyhow::Result<CheckmarkItem> {
    api.get_by_id(id).await.map_err(|err| {
        tracing::debug!(id, status = ?err.status(), "Fetching checkmark failed");
        anyhow::Error::new(err).context(LOAD_ERROR)
    })
}
