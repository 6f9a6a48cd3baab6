//! Form sessions: one in-progress draft per entity kind.
//!
//! A session is either Idle (empty draft, submitting creates) or
//! Editing (draft loaded from an entity, submitting updates). The only
//! local check is "required fields non-empty", performed at submit time
//! and surfaced as a single message listing every failure; a rejected
//! submit never reaches the network.

pub mod course;
pub mod professor;
pub mod user;

pub use course::CourseForm;
pub use professor::{ProfessorForm, PublicationRow};
pub use user::UserForm;

use crate::error::ConsoleError;

/// Single required-field notification, e.g. "Title and Professor are
/// required".
pub(crate) fn required(missing: &[&str]) -> ConsoleError {
    let verb = if missing.len() == 1 { "is" } else { "are" };
    ConsoleError::Validation(format!("{} {} required", missing.join(" and "), verb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_lists_every_missing_field() {
        let err = required(&["Title", "Professor"]);
        assert_eq!(err.to_string(), "Validation error: Title and Professor are required");
        let err = required(&["Name"]);
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }
}
