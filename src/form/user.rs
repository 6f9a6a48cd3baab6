//! User form session

use crate::error::ConsoleResult;
use crate::form::required;
use crate::models::{Role, User, UserDraft};

/// Draft of a user being created or edited.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    editing: Option<i64>,
    pub name: String,
    pub email: String,
    pub role: Role,
    course_ids: Vec<i64>,
}

impl UserForm {
    pub fn edit(&mut self, user: &User) {
        self.editing = Some(user.id);
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.role = user.role;
        // Enforce set semantics on load; the wire format is an ordered
        // sequence and may carry duplicates.
        self.course_ids.clear();
        for &id in &user.course_ids {
            if !self.course_ids.contains(&id) {
                self.course_ids.push(id);
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn course_ids(&self) -> &[i64] {
        &self.course_ids
    }

    /// Idempotent membership toggle: toggling the same id twice
    /// restores the original set.
    pub fn toggle_course(&mut self, course_id: i64) {
        if let Some(pos) = self.course_ids.iter().position(|&id| id == course_id) {
            self.course_ids.remove(pos);
        } else {
            self.course_ids.push(course_id);
        }
    }

    /// Validate and build the payload.
    pub fn submit(&self) -> ConsoleResult<UserDraft> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("Name");
        }
        if self.email.trim().is_empty() {
            missing.push("Email");
        }
        if !missing.is_empty() {
            return Err(required(&missing));
        }
        Ok(UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            course_ids: self.course_ids.clone(),
        })
    }
}
