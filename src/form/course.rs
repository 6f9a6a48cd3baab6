//! Course form session

use crate::error::ConsoleResult;
use crate::form::required;
use crate::models::{Course, CourseDraft};

/// Draft of a course being created or edited.
#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    editing: Option<i64>,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Raw select value; coerced to a numeric id at submit time.
    pub author_id: String,
}

impl CourseForm {
    /// Load an existing course into the draft and switch to Editing.
    pub fn edit(&mut self, course: &Course) {
        self.editing = Some(course.id);
        self.title = course.title.clone();
        self.description = course.description.clone();
        self.category = course.category.clone().unwrap_or_default();
        self.author_id = course.author_id.to_string();
    }

    /// Back to Idle with an empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Validate and build the payload. Title and a resolvable professor
    /// id are required; the category passes through as entered, even
    /// empty (display code substitutes "General", the record keeps what
    /// was typed).
    pub fn submit(&self) -> ConsoleResult<CourseDraft> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("Title");
        }
        let author_id = self.author_id.trim().parse::<i64>();
        if author_id.is_err() {
            missing.push("Professor");
        }
        if !missing.is_empty() {
            return Err(required(&missing));
        }
        Ok(CourseDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            author_id: author_id.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;

    #[test]
    fn submit_requires_title_and_professor() {
        let form = CourseForm::default();
        let err = form.submit().unwrap_err();
        match err {
            ConsoleError::Validation(msg) => {
                assert_eq!(msg, "Title and Professor are required")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn submit_coerces_the_author_id() {
        let form = CourseForm {
            title: "Systems".into(),
            author_id: " 3 ".into(),
            ..CourseForm::default()
        };
        let draft = form.submit().unwrap();
        assert_eq!(draft.author_id, 3);
    }

    #[test]
    fn empty_category_passes_through_unchanged() {
        let form = CourseForm {
            title: "Systems".into(),
            author_id: "3".into(),
            ..CourseForm::default()
        };
        assert_eq!(form.submit().unwrap().category, "");
    }

    #[test]
    fn editing_binds_to_the_course_id() {
        let course = Course {
            id: 9,
            title: "Rust".into(),
            description: "intro".into(),
            category: None,
            author_id: 4,
        };
        let mut form = CourseForm::default();
        form.edit(&course);
        assert_eq!(form.editing(), Some(9));
        assert_eq!(form.author_id, "4");
        assert_eq!(form.category, "");
        form.reset();
        assert_eq!(form.editing(), None);
        assert!(form.title.is_empty());
    }
}
