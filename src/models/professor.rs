//! Professor model and payloads

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Entity;

/// A professor as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Publication title → year. Titles are unique per professor; the
    /// backend may send years as numbers or strings.
    #[serde(default, deserialize_with = "publications_from_wire")]
    pub publications: IndexMap<String, String>,
}

impl Entity for Professor {
    fn id(&self) -> i64 {
        self.id
    }

    fn kind() -> &'static str {
        "professor"
    }
}

/// Payload for professor create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessorDraft {
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub publications: IndexMap<String, String>,
}

fn publications_from_wire<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    let raw: IndexMap<String, Year> = IndexMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(title, year)| {
            let year = match year {
                Year::Text(s) => s,
                Year::Number(n) => n.to_string(),
            };
            (title, year)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_years_accept_strings_and_numbers() {
        let p: Professor = serde_json::from_str(
            r#"{"id":1,"name":"Ada","publications":{"On Engines":1843,"Notes":"1842"}}"#,
        )
        .unwrap();
        assert_eq!(p.publications.get("On Engines").map(String::as_str), Some("1843"));
        assert_eq!(p.publications.get("Notes").map(String::as_str), Some("1842"));
    }

    #[test]
    fn publications_preserve_wire_order() {
        let p: Professor = serde_json::from_str(
            r#"{"id":1,"name":"Ada","publications":{"Z":1,"A":2,"M":3}}"#,
        )
        .unwrap();
        let titles: Vec<_> = p.publications.keys().map(String::as_str).collect();
        assert_eq!(titles, ["Z", "A", "M"]);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let p: Professor = serde_json::from_str(r#"{"id":1,"name":"Ada"}"#).unwrap();
        assert!(p.skills.is_empty());
        assert!(p.publications.is_empty());
    }
}
