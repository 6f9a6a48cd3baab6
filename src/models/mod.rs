//! Data models for the Lectern console

pub mod course;
pub mod professor;
pub mod user;

// Re-export commonly used types
pub use course::{Course, CourseDraft, DEFAULT_CATEGORY};
pub use professor::{Professor, ProfessorDraft};
pub use user::{Role, User, UserDraft};

/// A server-owned record identified by a server-assigned id. The console
/// never mints ids of its own.
pub trait Entity: Clone + Send + Sync {
    fn id(&self) -> i64;

    /// Lowercase noun used in prompts ("course", "user", "professor").
    fn kind() -> &'static str;
}
