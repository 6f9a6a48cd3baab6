//! Course model and payloads

use serde::{Deserialize, Serialize};

use crate::models::Entity;

/// Display category used when a course carries none.
pub const DEFAULT_CATEGORY: &str = "General";

/// A course as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Stored category, possibly absent or empty. Display code must go
    /// through [`Course::display_category`] instead of reading this raw.
    #[serde(default)]
    pub category: Option<String>,
    /// Foreign key to a professor. May dangle; lookups degrade to
    /// "Unknown" rather than failing.
    pub author_id: i64,
}

impl Course {
    /// Category for display and grouping. Empty or missing maps to
    /// "General" without mutating the stored value.
    pub fn display_category(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }
}

impl Entity for Course {
    fn id(&self) -> i64 {
        self.id
    }

    fn kind() -> &'static str {
        "course"
    }
}

/// Payload for course create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub author_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(category: Option<&str>) -> Course {
        Course {
            id: 1,
            title: "Systems".into(),
            description: String::new(),
            category: category.map(Into::into),
            author_id: 3,
        }
    }

    #[test]
    fn missing_and_empty_categories_display_as_general() {
        assert_eq!(course(None).display_category(), "General");
        assert_eq!(course(Some("")).display_category(), "General");
        assert_eq!(course(Some("  ")).display_category(), "General");
        assert_eq!(course(Some("DevOps")).display_category(), "DevOps");
    }

    #[test]
    fn display_category_does_not_mutate_the_record() {
        let c = course(Some(""));
        let _ = c.display_category();
        assert_eq!(c.category.as_deref(), Some(""));
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_value(CourseDraft {
            title: "Systems".into(),
            description: String::new(),
            category: String::new(),
            author_id: 3,
        })
        .unwrap();
        assert_eq!(json["authorId"], 3);

        let parsed: Course =
            serde_json::from_str(r#"{"id":7,"title":"Rust","authorId":2}"#).unwrap();
        assert_eq!(parsed.author_id, 2);
        assert_eq!(parsed.category, None);
    }
}
