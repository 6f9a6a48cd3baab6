//! Course catalog console

use std::sync::Arc;
use std::time::Duration;

use crate::error::ConsoleResult;
use crate::form::CourseForm;
use crate::gateway::{ApiClient, CourseGateway, CourseQueries, EntityGateway, ProfessorGateway};
use crate::models::{Course, Professor};
use crate::resolver;
use crate::store::{Confirm, EntityStore, SearchSession};

/// List, search, filter and edit courses. Holds a professor snapshot
/// alongside the course store for the author dropdown and for name
/// resolution.
pub struct CourseConsole {
    store: EntityStore<CourseGateway>,
    form: CourseForm,
    search: SearchSession<CourseGateway>,
    queries: Arc<CourseGateway>,
    professor_gateway: ProfessorGateway,
    professors: Vec<Professor>,
    confirm: Box<dyn Confirm + Send + Sync>,
    keyword: String,
    professor_filter: Option<i64>,
}

impl CourseConsole {
    pub fn new(
        api: ApiClient,
        debounce: Duration,
        confirm: Box<dyn Confirm + Send + Sync>,
    ) -> Self {
        let queries = Arc::new(CourseGateway::new(api.clone()));
        Self {
            store: EntityStore::new(CourseGateway::new(api.clone())),
            form: CourseForm::default(),
            search: SearchSession::new(queries.clone(), debounce),
            queries,
            professor_gateway: ProfessorGateway::new(api),
            professors: Vec::new(),
            confirm,
            keyword: String::new(),
            professor_filter: None,
        }
    }

    /// Initial page load: the course collection plus the professor
    /// snapshot.
    pub async fn load(&mut self) -> ConsoleResult<()> {
        self.store.load().await?;
        self.professors = self.professor_gateway.list().await?;
        Ok(())
    }

    pub fn courses(&self) -> &[Course] {
        self.store.items()
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn selected(&self) -> Option<&Course> {
        self.store.selected()
    }

    pub fn form(&self) -> &CourseForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CourseForm {
        &mut self.form
    }

    /// Select a course for editing and load it into the form. Any
    /// unsaved draft for a previous selection is discarded without a
    /// warning.
    pub fn edit(&mut self, course: Course) {
        self.form.edit(&course);
        self.store.select(Some(course));
    }

    /// Clear selection and draft ("New Course").
    pub fn reset(&mut self) {
        self.form.reset();
        self.store.select(None);
    }

    /// Submit the draft: a local validation failure surfaces before any
    /// network call; success resets the form and reloads the list.
    pub async fn save(&mut self) -> ConsoleResult<Course> {
        let draft = self.form.submit()?;
        let saved = self.store.commit(&draft).await?;
        self.form.reset();
        Ok(saved)
    }

    pub async fn delete(&mut self, id: i64) -> ConsoleResult<()> {
        self.store.remove(id, self.confirm.as_ref()).await?;
        if self.form.editing() == Some(id) {
            self.form.reset();
        }
        Ok(())
    }

    /// One keystroke in the search box. An empty keyword is equivalent
    /// to a plain reload; otherwise the request is debounced and stale
    /// responses are dropped.
    pub async fn search_input(&mut self, keyword: &str) -> ConsoleResult<()> {
        self.keyword = keyword.to_string();
        if keyword.trim().is_empty() {
            return self.store.load().await;
        }
        match self.search.input(keyword).await {
            Some(result) => {
                self.store.replace(result?);
                Ok(())
            }
            // superseded by a newer keystroke or a newer response
            None => Ok(()),
        }
    }

    /// Server-side filter by professor; `None` reloads the full list.
    pub async fn filter_professor(&mut self, professor_id: Option<i64>) -> ConsoleResult<()> {
        self.professor_filter = professor_id;
        match professor_id {
            None => self.store.load().await,
            Some(id) => {
                let courses = self.queries.by_professor(id).await?;
                self.store.replace(courses);
                Ok(())
            }
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn professor_filter(&self) -> Option<i64> {
        self.professor_filter
    }

    pub fn professor_name(&self, author_id: i64) -> String {
        resolver::professor_name(&self.professors, author_id)
    }
}
