//! User model and related types

use serde::{Deserialize, Serialize};

use crate::models::Entity;

/// User roles. Enrollment only carries meaning for students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Visitor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Visitor => "visitor",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "visitor" => Ok(Role::Visitor),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// A user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Enrolled course ids. Transported as an ordered sequence but
    /// treated as a set; membership is toggled, never duplicated.
    #[serde(default)]
    pub course_ids: Vec<i64>,
}

impl Entity for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn kind() -> &'static str {
        "user"
    }
}

/// Payload for user create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub course_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_as_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        let role: Role = serde_json::from_str(r#""visitor""#).unwrap();
        assert_eq!(role, Role::Visitor);
        assert_eq!("STUDENT".parse::<Role>().unwrap(), Role::Student);
        assert!("teacher".parse::<Role>().is_err());
    }

    #[test]
    fn course_ids_default_to_empty() {
        let u: User = serde_json::from_str(
            r#"{"id":1,"name":"Kim","email":"kim@example.org","role":"student"}"#,
        )
        .unwrap();
        assert!(u.course_ids.is_empty());
    }
}
