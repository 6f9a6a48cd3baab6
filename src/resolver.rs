//! Cross-reference resolver: display-only aggregates and lookups
//! derived from current store snapshots.
//!
//! Everything here is a pure function of the slices it is handed,
//! recomputed on every call. No index is maintained and no snapshot is
//! ever mutated; a lookup that fails degrades to a placeholder instead
//! of propagating an error.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{Course, Professor, User};

/// Placeholder shown when an author id does not resolve.
pub const UNKNOWN_PROFESSOR: &str = "Unknown";

/// One labelled value of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub value: i64,
}

/// One bar of the users-per-course series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseUsage {
    pub title: String,
    pub users: i64,
}

/// Linear scan for the professor's name; "Unknown" on a dangling id.
pub fn professor_name(professors: &[Professor], author_id: i64) -> String {
    professors
        .iter()
        .find(|p| p.id == author_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN_PROFESSOR.to_string())
}

/// Same lookup for an id still in form-field form. The raw value is
/// coerced to a number before comparison; anything unparsable resolves
/// to "Unknown".
pub fn professor_name_raw(professors: &[Professor], raw: &str) -> String {
    match raw.trim().parse::<i64>() {
        Ok(id) => professor_name(professors, id),
        Err(_) => UNKNOWN_PROFESSOR.to_string(),
    }
}

/// Number of users enrolled in a course.
pub fn users_for_course(users: &[User], course_id: i64) -> i64 {
    users.iter().filter(|u| u.course_ids.contains(&course_id)).count() as i64
}

/// Bar-chart series: one entry per course, in collection order.
pub fn users_per_course(courses: &[Course], users: &[User]) -> Vec<CourseUsage> {
    courses
        .iter()
        .map(|course| CourseUsage {
            title: course.title.clone(),
            users: users_for_course(users, course.id),
        })
        .collect()
}

/// Category → course-count breakdown. Missing categories count under
/// "General"; labels keep the insertion order of first occurrence.
pub fn courses_by_category(courses: &[Course]) -> Vec<CategoryCount> {
    let mut counts: IndexMap<&str, i64> = IndexMap::new();
    for course in courses {
        *counts.entry(course.display_category()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, value)| CategoryCount {
            label: label.to_string(),
            value,
        })
        .collect()
}

/// The last `n` courses of the snapshot, oldest first.
pub fn recent_courses(courses: &[Course], n: usize) -> &[Course] {
    &courses[courses.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, title: &str, category: Option<&str>, author_id: i64) -> Course {
        Course {
            id,
            title: title.into(),
            description: String::new(),
            category: category.map(Into::into),
            author_id,
        }
    }

    fn professor(id: i64, name: &str) -> Professor {
        Professor {
            id,
            name: name.into(),
            bio: String::new(),
            skills: vec![],
            publications: IndexMap::new(),
        }
    }

    fn student(id: i64, course_ids: Vec<i64>) -> User {
        User {
            id,
            name: format!("user-{}", id),
            email: format!("u{}@example.org", id),
            role: crate::models::Role::Student,
            course_ids,
        }
    }

    #[test]
    fn name_resolution_handles_numeric_and_string_ids() {
        let profs = vec![professor(3, "Grace Hopper")];
        assert_eq!(professor_name(&profs, 3), "Grace Hopper");
        assert_eq!(professor_name(&profs, 9), "Unknown");
        assert_eq!(professor_name_raw(&profs, "3"), "Grace Hopper");
        assert_eq!(professor_name_raw(&profs, " 3 "), "Grace Hopper");
        assert_eq!(professor_name_raw(&profs, ""), "Unknown");
        assert_eq!(professor_name_raw(&profs, "three"), "Unknown");
    }

    #[test]
    fn missing_categories_group_under_general() {
        let courses = vec![
            course(1, "Rust", Some("Systems"), 1),
            course(2, "Go", None, 1),
            course(3, "Zig", Some(""), 1),
        ];
        let breakdown = courses_by_category(&courses);
        let general = breakdown.iter().find(|c| c.label == "General").unwrap();
        assert_eq!(general.value, 2);
        // grouping never writes the default back onto the snapshot
        assert_eq!(courses[1].category, None);
        assert_eq!(courses[2].category.as_deref(), Some(""));
    }

    #[test]
    fn category_order_is_first_occurrence_not_sorted() {
        let courses = vec![
            course(1, "a", Some("Zeta"), 1),
            course(2, "b", Some("Alpha"), 1),
            course(3, "c", Some("Zeta"), 1),
            course(4, "d", None, 1),
        ];
        let labels: Vec<_> = courses_by_category(&courses)
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, ["Zeta", "Alpha", "General"]);
    }

    #[test]
    fn users_per_course_counts_enrollment() {
        let courses = vec![course(1, "Rust", None, 1), course(2, "Go", None, 1)];
        let users = vec![
            student(1, vec![1, 2]),
            student(2, vec![2]),
            student(3, vec![]),
        ];
        let series = users_per_course(&courses, &users);
        assert_eq!(series[0], CourseUsage { title: "Rust".into(), users: 1 });
        assert_eq!(series[1], CourseUsage { title: "Go".into(), users: 2 });
    }

    #[test]
    fn recent_courses_returns_the_tail() {
        let courses: Vec<_> = (1..=7)
            .map(|i| course(i, &format!("c{}", i), None, 1))
            .collect();
        let recent = recent_courses(&courses, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, 3);
        assert_eq!(recent_courses(&courses[..2], 5).len(), 2);
    }
}
