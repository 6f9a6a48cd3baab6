//! Course collection gateway

use async_trait::async_trait;

use crate::error::ConsoleResult;
use crate::gateway::{ApiClient, EntityGateway};
use crate::models::{Course, CourseDraft};

/// Read-side course queries served by the backend. Search and filter
/// are server-side operations, never derived from the local snapshot.
#[async_trait]
pub trait CourseQueries: Send + Sync {
    async fn search(&self, keyword: &str) -> ConsoleResult<Vec<Course>>;
    async fn by_professor(&self, professor_id: i64) -> ConsoleResult<Vec<Course>>;
}

#[derive(Clone)]
pub struct CourseGateway {
    api: ApiClient,
}

impl CourseGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EntityGateway for CourseGateway {
    type Entity = Course;
    type Draft = CourseDraft;

    async fn list(&self) -> ConsoleResult<Vec<Course>> {
        self.api.get_json("/courses").await
    }

    async fn create(&self, draft: &CourseDraft) -> ConsoleResult<Course> {
        self.api.post_json("/courses", draft).await
    }

    async fn update(&self, id: i64, draft: &CourseDraft) -> ConsoleResult<Course> {
        self.api.put_json(&format!("/courses/{}", id), draft).await
    }

    async fn remove(&self, id: i64) -> ConsoleResult<()> {
        self.api.delete(&format!("/courses/{}", id)).await
    }
}

#[async_trait]
impl CourseQueries for CourseGateway {
    async fn search(&self, keyword: &str) -> ConsoleResult<Vec<Course>> {
        self.api
            .get_json_with("/courses/search", &[("q", keyword.to_string())])
            .await
    }

    async fn by_professor(&self, professor_id: i64) -> ConsoleResult<Vec<Course>> {
        self.api
            .get_json_with(
                "/courses/filter",
                &[("professorId", professor_id.to_string())],
            )
            .await
    }
}
