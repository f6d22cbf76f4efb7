use checkmark_core::{CheckmarkItem, NewCheckmark, Priority};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server responded with {status}")]
    Status { status: StatusCode },
}

impl ClientError {
    /// HTTP status behind the failure, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(err) => err.status(),
            ClientError::Status { status } => Some(*status),
        }
    }
}

/// Thin typed wrapper over the `/checkmark` resource.
#[derive(Debug, Clone)]
pub struct CheckmarkApi {
    client: reqwest::Client,
    base_url: String,
}

impl CheckmarkApi {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api";

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/checkmark{}", self.base_url, path)
    }

    fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status { status })
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Ok(Self::check(response)?.json().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<CheckmarkItem>, ClientError> {
        self.fetch("").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<CheckmarkItem, ClientError> {
        self.fetch(&format!("/{}", id)).await
    }

    /// Creates an item and returns it as stored, with its assigned id.
    #[tracing::instrument(skip(self, item), fields(title = %item.title))]
    pub async fn create(&self, item: &NewCheckmark) -> Result<CheckmarkItem, ClientError> {
        let response = self.client.post(self.url("")).json(item).send().await?;
        let created: CheckmarkItem = Self::check(response)?.json().await?;
        tracing::debug!(id = created.id, "Created checkmark");
        Ok(created)
    }

    #[tracing::instrument(skip(self, item))]
    pub async fn update(&self, id: i32, item: &CheckmarkItem) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/{}", id)))
            .json(item)
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_completed(&self) -> Result<Vec<CheckmarkItem>, ClientError> {
        self.fetch("/completed").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_pending(&self) -> Result<Vec<CheckmarkItem>, ClientError> {
        self.fetch("/pending").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_priority(
        &self,
        priority: Priority,
    ) -> Result<Vec<CheckmarkItem>, ClientError> {
        self.fetch(&format!("/priority/{}", priority.as_str())).await
    }
}

impl Default for CheckmarkApi {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
