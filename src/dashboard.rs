//! Dashboard summary service

use serde::Serialize;

use crate::error::ConsoleResult;
use crate::gateway::{ApiClient, CourseGateway, EntityGateway, ProfessorGateway, UserGateway};
use crate::models::{Course, Professor, User};
use crate::resolver::{self, CategoryCount, CourseUsage};

/// How many courses the "recent" table shows.
const RECENT_COURSES: usize = 5;

/// Fetches the three collections and derives the aggregate view.
pub struct DashboardService {
    courses: CourseGateway,
    users: UserGateway,
    professors: ProfessorGateway,
}

/// One row of the recent-courses table, with the author resolved and
/// the category already defaulted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentCourse {
    pub title: String,
    pub author: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub courses_total: i64,
    pub users_total: i64,
    pub professors_total: i64,
    pub users_per_course: Vec<CourseUsage>,
    pub courses_by_category: Vec<CategoryCount>,
    pub recent_courses: Vec<RecentCourse>,
}

impl DashboardSummary {
    /// Derive the summary from in-memory snapshots. Pure; the fetch
    /// lives in [`DashboardService::overview`].
    pub fn build(courses: &[Course], users: &[User], professors: &[Professor]) -> Self {
        let recent_courses = resolver::recent_courses(courses, RECENT_COURSES)
            .iter()
            .map(|course| RecentCourse {
                title: course.title.clone(),
                author: resolver::professor_name(professors, course.author_id),
                category: course.display_category().to_string(),
            })
            .collect();
        Self {
            courses_total: courses.len() as i64,
            users_total: users.len() as i64,
            professors_total: professors.len() as i64,
            users_per_course: resolver::users_per_course(courses, users),
            courses_by_category: resolver::courses_by_category(courses),
            recent_courses,
        }
    }
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            courses: CourseGateway::new(api.clone()),
            users: UserGateway::new(api.clone()),
            professors: ProfessorGateway::new(api),
        }
    }

    pub async fn overview(&self) -> ConsoleResult<DashboardSummary> {
        let (courses, users, professors) = tokio::try_join!(
            self.courses.list(),
            self.users.list(),
            self.professors.list(),
        )?;
        Ok(DashboardSummary::build(&courses, &users, &professors))
    }
}
