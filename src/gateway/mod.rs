//! Remote entity gateway: the boundary translating entity operations
//! into HTTP requests against the backend.
//!
//! Calls are single-attempt with no retry and no configured timeout; a
//! failed call surfaces the transport error to the caller untouched.

pub mod courses;
pub mod professors;
pub mod users;

pub use courses::{CourseGateway, CourseQueries};
pub use professors::ProfessorGateway;
pub use users::UserGateway;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ConsoleError, ConsoleResult, ErrorEnvelope};
use crate::models::Entity;

/// Collection operations shared by every entity kind.
#[async_trait]
pub trait EntityGateway: Send + Sync {
    type Entity: Entity;
    type Draft: Serialize + Send + Sync;

    async fn list(&self) -> ConsoleResult<Vec<Self::Entity>>;
    async fn create(&self, draft: &Self::Draft) -> ConsoleResult<Self::Entity>;
    async fn update(&self, id: i64, draft: &Self::Draft) -> ConsoleResult<Self::Entity>;
    async fn remove(&self, id: i64) -> ConsoleResult<()>;
}

/// Shared HTTP client for all gateways. No authentication header is
/// attached; the backend is open within the deployment.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &crate::config::BackendConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ConsoleResult<T> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub async fn get_json_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ConsoleResult<T> {
        tracing::debug!("GET {} {:?}", path, query);
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ConsoleResult<T> {
        tracing::debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ConsoleResult<T> {
        tracing::debug!("PUT {}", path);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> ConsoleResult<()> {
        tracing::debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ConsoleResult<T> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> ConsoleResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => envelope.message,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => status.to_string(),
        };
        tracing::warn!("Request failed with {}: {}", status, message);
        Err(ConsoleError::from_status(status.as_u16(), message))
    }
}
