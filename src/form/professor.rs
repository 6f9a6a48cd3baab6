//! Professor form session, including the dynamic skills and
//! publications sub-lists.

use indexmap::IndexMap;

use crate::error::ConsoleResult;
use crate::form::required;
use crate::models::{Professor, ProfessorDraft};

/// One publication as edited in the form, before the submit-time
/// collapse into a title → year mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationRow {
    pub title: String,
    pub year: String,
}

/// Draft of a professor being created or edited.
#[derive(Debug, Clone)]
pub struct ProfessorForm {
    editing: Option<i64>,
    pub name: String,
    pub bio: String,
    skills: Vec<String>,
    publications: Vec<PublicationRow>,
}

impl Default for ProfessorForm {
    fn default() -> Self {
        // One blank row each so a fresh form has something to type into.
        Self {
            editing: None,
            name: String::new(),
            bio: String::new(),
            skills: vec![String::new()],
            publications: vec![PublicationRow::default()],
        }
    }
}

impl ProfessorForm {
    pub fn edit(&mut self, professor: &Professor) {
        self.editing = Some(professor.id);
        self.name = professor.name.clone();
        self.bio = professor.bio.clone();
        self.skills = professor.skills.clone();
        self.publications = professor
            .publications
            .iter()
            .map(|(title, year)| PublicationRow {
                title: title.clone(),
                year: year.clone(),
            })
            .collect();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    // --- Skills sub-list ---

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn add_skill(&mut self) {
        self.skills.push(String::new());
    }

    pub fn set_skill(&mut self, index: usize, value: impl Into<String>) {
        if let Some(skill) = self.skills.get_mut(index) {
            *skill = value.into();
        }
    }

    /// Removing the last remaining skill leaves an empty sequence; the
    /// view keeps its "add" affordance either way.
    pub fn remove_skill(&mut self, index: usize) {
        if index < self.skills.len() {
            self.skills.remove(index);
        }
    }

    // --- Publications sub-list ---

    pub fn publications(&self) -> &[PublicationRow] {
        &self.publications
    }

    pub fn add_publication(&mut self) {
        self.publications.push(PublicationRow::default());
    }

    pub fn set_publication_title(&mut self, index: usize, title: impl Into<String>) {
        if let Some(row) = self.publications.get_mut(index) {
            row.title = title.into();
        }
    }

    pub fn set_publication_year(&mut self, index: usize, year: impl Into<String>) {
        if let Some(row) = self.publications.get_mut(index) {
            row.year = year.into();
        }
    }

    pub fn remove_publication(&mut self, index: usize) {
        if index < self.publications.len() {
            self.publications.remove(index);
        }
    }

    /// Validate and build the payload. Blank skills are dropped; rows
    /// missing either title or year are dropped; the surviving rows
    /// collapse into a title → year map where duplicate titles keep the
    /// last written year.
    pub fn submit(&self) -> ConsoleResult<ProfessorDraft> {
        if self.name.trim().is_empty() {
            return Err(required(&["Name"]));
        }
        let skills = self
            .skills
            .iter()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .collect();
        let mut publications = IndexMap::new();
        for row in &self.publications {
            if row.title.trim().is_empty() || row.year.trim().is_empty() {
                continue;
            }
            publications.insert(row.title.clone(), row.year.clone());
        }
        Ok(ProfessorDraft {
            name: self.name.clone(),
            bio: self.bio.clone(),
            skills,
            publications,
        })
    }
}
