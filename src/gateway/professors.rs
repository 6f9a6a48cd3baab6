//! Professor collection gateway

use async_trait::async_trait;

use crate::error::ConsoleResult;
use crate::gateway::{ApiClient, EntityGateway};
use crate::models::{Professor, ProfessorDraft};

#[derive(Clone)]
pub struct ProfessorGateway {
    api: ApiClient,
}

impl ProfessorGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EntityGateway for ProfessorGateway {
    type Entity = Professor;
    type Draft = ProfessorDraft;

    async fn list(&self) -> ConsoleResult<Vec<Professor>> {
        self.api.get_json("/professors").await
    }

    async fn create(&self, draft: &ProfessorDraft) -> ConsoleResult<Professor> {
        self.api.post_json("/professors", draft).await
    }

    async fn update(&self, id: i64, draft: &ProfessorDraft) -> ConsoleResult<Professor> {
        self.api.put_json(&format!("/professors/{}", id), draft).await
    }

    async fn remove(&self, id: i64) -> ConsoleResult<()> {
        self.api.delete(&format!("/professors/{}", id)).await
    }
}
