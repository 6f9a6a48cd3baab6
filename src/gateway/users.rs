//! User collection gateway

use async_trait::async_trait;

use crate::error::ConsoleResult;
use crate::gateway::{ApiClient, EntityGateway};
use crate::models::{User, UserDraft};

#[derive(Clone)]
pub struct UserGateway {
    api: ApiClient,
}

impl UserGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EntityGateway for UserGateway {
    type Entity = User;
    type Draft = UserDraft;

    async fn list(&self) -> ConsoleResult<Vec<User>> {
        self.api.get_json("/users").await
    }

    async fn create(&self, draft: &UserDraft) -> ConsoleResult<User> {
        self.api.post_json("/users", draft).await
    }

    async fn update(&self, id: i64, draft: &UserDraft) -> ConsoleResult<User> {
        self.api.put_json(&format!("/users/{}", id), draft).await
    }

    async fn remove(&self, id: i64) -> ConsoleResult<()> {
        self.api.delete(&format!("/users/{}", id)).await
    }
}
