//! In-memory entity store: the per-view cache of one collection plus
//! the current selection.
//!
//! The store is the only shared mutable state on the view side. It is
//! mutated from a single task; a `load` triggered by one component is
//! visible to another only once both read the same store instance.

pub mod search;

pub use search::SearchSession;

use crate::error::{ConsoleError, ConsoleResult};
use crate::gateway::EntityGateway;
use crate::models::Entity;

/// Blocking yes/no prompt shown before destructive actions.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Owns the authoritative-for-this-view collection and at most one
/// selected entity. "Creating new" is represented as no selection.
pub struct EntityStore<G: EntityGateway> {
    gateway: G,
    items: Vec<G::Entity>,
    selected: Option<G::Entity>,
}

impl<G: EntityGateway> EntityStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            selected: None,
        }
    }

    pub fn items(&self) -> &[G::Entity] {
        &self.items
    }

    pub fn selected(&self) -> Option<&G::Entity> {
        self.selected.as_ref()
    }

    /// Set or clear the selection. Reselecting discards any unsaved
    /// draft held alongside; callers reset their form session.
    pub fn select(&mut self, entity: Option<G::Entity>) {
        self.selected = entity;
    }

    /// Fetch the full collection, replacing the prior one entirely.
    /// The selection is deliberately left alone: a reload triggered by
    /// another view's mutation must not drop an edit in progress.
    pub async fn load(&mut self) -> ConsoleResult<()> {
        self.items = self.gateway.list().await?;
        Ok(())
    }

    /// Replace the collection with an externally fetched snapshot
    /// (search or filter results).
    pub fn replace(&mut self, items: Vec<G::Entity>) {
        self.items = items;
    }

    /// Save a draft: update when an entity is selected, create
    /// otherwise. On success the selection is cleared and the
    /// collection reloaded; on failure both are left untouched.
    pub async fn commit(&mut self, draft: &G::Draft) -> ConsoleResult<G::Entity> {
        let saved = match &self.selected {
            Some(entity) => self.gateway.update(entity.id(), draft).await?,
            None => self.gateway.create(draft).await?,
        };
        self.selected = None;
        self.load().await?;
        Ok(saved)
    }

    /// Delete after explicit confirmation. A declined prompt returns
    /// [`ConsoleError::Cancelled`] before any network call. The entity
    /// stays listed until the post-delete reload lands; removal is
    /// never applied optimistically.
    pub async fn remove(&mut self, id: i64, confirm: &dyn Confirm) -> ConsoleResult<()> {
        let prompt = format!("Are you sure you want to delete this {}?", G::Entity::kind());
        if !confirm.confirm(&prompt) {
            return Err(ConsoleError::Cancelled);
        }
        self.gateway.remove(id).await?;
        if self.selected.as_ref().is_some_and(|e| e.id() == id) {
            self.selected = None;
        }
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::models::{Course, CourseDraft};

    fn course(id: i64, title: &str) -> Course {
        Course {
            id,
            title: title.into(),
            description: String::new(),
            category: None,
            author_id: 1,
        }
    }

    fn draft(title: &str) -> CourseDraft {
        CourseDraft {
            title: title.into(),
            description: String::new(),
            category: String::new(),
            author_id: 1,
        }
    }

    /// In-memory gateway that counts calls and can be told to fail.
    #[derive(Default)]
    struct FakeGateway {
        courses: Mutex<Vec<Course>>,
        fail_writes: bool,
        lists: AtomicUsize,
        creates: AtomicUsize,
        updates: AtomicUsize,
        removes: AtomicUsize,
    }

    impl FakeGateway {
        fn seeded(courses: Vec<Course>) -> Self {
            Self {
                courses: Mutex::new(courses),
                ..Self::default()
            }
        }

        fn failing(courses: Vec<Course>) -> Self {
            Self {
                fail_writes: true,
                ..Self::seeded(courses)
            }
        }

        fn network_calls(&self) -> usize {
            self.lists.load(Ordering::SeqCst)
                + self.creates.load(Ordering::SeqCst)
                + self.updates.load(Ordering::SeqCst)
                + self.removes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EntityGateway for FakeGateway {
        type Entity = Course;
        type Draft = CourseDraft;

        async fn list(&self) -> ConsoleResult<Vec<Course>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            Ok(self.courses.lock().unwrap().clone())
        }

        async fn create(&self, draft: &CourseDraft) -> ConsoleResult<Course> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(ConsoleError::Validation("rejected".into()));
            }
            let mut courses = self.courses.lock().unwrap();
            let id = courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            let created = Course {
                id,
                title: draft.title.clone(),
                description: draft.description.clone(),
                category: Some(draft.category.clone()),
                author_id: draft.author_id,
            };
            courses.push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: i64, draft: &CourseDraft) -> ConsoleResult<Course> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(ConsoleError::Validation("rejected".into()));
            }
            let mut courses = self.courses.lock().unwrap();
            let existing = courses
                .iter_mut()
                .find(|c| c.id == id)
                .expect("update of unknown id");
            existing.title = draft.title.clone();
            Ok(existing.clone())
        }

        async fn remove(&self, id: i64) -> ConsoleResult<()> {
            self.removes.fetch_add(1, Ordering::SeqCst);
            self.courses.lock().unwrap().retain(|c| c.id != id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_replaces_collection_and_keeps_selection() {
        let mut store = EntityStore::new(FakeGateway::seeded(vec![course(1, "Rust")]));
        store.select(Some(course(1, "Rust")));
        store.load().await.unwrap();
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.selected().map(|c| c.id), Some(1));
    }

    #[tokio::test]
    async fn commit_without_selection_creates_then_reloads() {
        let mut store = EntityStore::new(FakeGateway::seeded(vec![]));
        let saved = store.commit(&draft("Systems")).await.unwrap();
        assert_eq!(saved.title, "Systems");
        assert_eq!(store.items().len(), 1);
        assert!(store.selected().is_none());
    }

    #[tokio::test]
    async fn commit_with_selection_updates_the_selected_entity() {
        let mut store = EntityStore::new(FakeGateway::seeded(vec![course(4, "Old")]));
        store.select(Some(course(4, "Old")));
        store.commit(&draft("New")).await.unwrap();
        assert_eq!(store.items()[0].title, "New");
        assert!(store.selected().is_none());
    }

    #[tokio::test]
    async fn failed_commit_leaves_selection_and_collection_unchanged() {
        let mut store = EntityStore::new(FakeGateway::failing(vec![course(4, "Old")]));
        store.load().await.unwrap();
        store.select(Some(course(4, "Old")));
        let err = store.commit(&draft("New")).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
        assert_eq!(store.selected().map(|c| c.id), Some(4));
        assert_eq!(store.items()[0].title, "Old");
    }

    #[tokio::test]
    async fn declined_confirmation_makes_no_network_call() {
        let mut confirm = MockConfirm::new();
        confirm.expect_confirm().return_const(false);

        let mut store = EntityStore::new(FakeGateway::seeded(vec![course(2, "Rust")]));
        store.load().await.unwrap();
        store.select(Some(course(2, "Rust")));
        let before = store.gateway.network_calls();

        let err = store.remove(2, &confirm).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Cancelled));
        assert_eq!(store.gateway.network_calls(), before);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.selected().map(|c| c.id), Some(2));
    }

    #[tokio::test]
    async fn confirmed_remove_reloads_and_clears_matching_selection() {
        let mut confirm = MockConfirm::new();
        confirm
            .expect_confirm()
            .withf(|prompt| prompt.contains("delete this course"))
            .return_const(true);

        let mut store =
            EntityStore::new(FakeGateway::seeded(vec![course(2, "Rust"), course(3, "Go")]));
        store.select(Some(course(2, "Rust")));
        store.remove(2, &confirm).await.unwrap();
        assert!(store.selected().is_none());
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].id, 3);
    }

    #[tokio::test]
    async fn removing_an_unselected_entity_keeps_the_selection() {
        let mut confirm = MockConfirm::new();
        confirm.expect_confirm().return_const(true);

        let mut store =
            EntityStore::new(FakeGateway::seeded(vec![course(2, "Rust"), course(3, "Go")]));
        store.select(Some(course(3, "Go")));
        store.remove(2, &confirm).await.unwrap();
        assert_eq!(store.selected().map(|c| c.id), Some(3));
    }
}
