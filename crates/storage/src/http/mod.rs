use std::env;

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::repository::StorageError;

mod card_repo;
mod community_repo;
mod deck_repo;

/// Base URL used when `STUDY_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub base_url: Url,
}

impl StorageConfig {
    /// Parse a base URL. A trailing slash is added so endpoints join beneath it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if `raw` is not an absolute URL.
    pub fn new(raw: &str) -> Result<Self, StorageError> {
        let raw = raw.trim();
        let normalized = if raw.ends_with('/') {
            raw.to_owned()
        } else {
            format!("{raw}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| StorageError::InvalidUrl(format!("{raw}: {e}")))?;
        Ok(Self { base_url })
    }

    /// Read `STUDY_API_URL`, falling back to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, StorageError> {
        match env::var("STUDY_API_URL") {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Resolve an endpoint against the base URL.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if the join fails.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, StorageError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| StorageError::InvalidUrl(format!("{}: {e}", endpoint.path())))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    GetCommunities,
    GetDecks,
    CreateCard,
    CreateDeck,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GetCommunities => "getCommunities",
            Endpoint::GetDecks => "getDecks",
            Endpoint::CreateCard => "create/card",
            Endpoint::CreateDeck => "create/deck",
        }
    }
}

/// HTTP adapter for the study API.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    config: StorageConfig,
}

impl HttpRepository {
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the HTTP client cannot be built.
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        let client = Client::builder()
            .build()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, StorageError> {
        let url = self.config.endpoint_url(endpoint)?;
        tracing::debug!(endpoint = endpoint.path(), %url, "GET");

        let response = self.client.get(url).send().await.map_err(connection)?;
        let response = check_status(response)?;
        response.json::<T>().await.map_err(serialization)
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<(), StorageError> {
        let url = self.config.endpoint_url(endpoint)?;
        tracing::debug!(endpoint = endpoint.path(), %url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(connection)?;
        check_status(response)?;
        Ok(())
    }
}

fn check_status(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StorageError::Status(status.as_u16()))
    }
}

fn connection(e: reqwest::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn serialization(e: reqwest::Error) -> StorageError {
    StorageError::Serialization(e.to_string())
}
