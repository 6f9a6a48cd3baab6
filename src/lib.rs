//! Lectern Academic Content Management Console
//!
//! A terminal administration console for the Lectern academic content
//! backend: lists, creates, edits and deletes courses, users and
//! professors, and derives a summary dashboard, over the backend's REST
//! JSON API. All business rules live server-side; this crate is
//! presentation state and thin data-fetching glue.

use std::sync::Arc;
use std::time::Duration;

pub mod config;
pub mod console;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod gateway;
pub mod models;
pub mod resolver;
pub mod store;

pub use config::AppConfig;
pub use error::{ConsoleError, ConsoleResult};

/// Top-level console: one API client wired into the per-entity
/// consoles and the dashboard.
pub struct Console {
    pub config: Arc<AppConfig>,
    pub dashboard: dashboard::DashboardService,
    pub courses: console::CourseConsole,
    pub users: console::UserConsole,
    pub professors: console::ProfessorConsole,
}

impl Console {
    pub fn new(config: AppConfig) -> Self {
        let api = gateway::ApiClient::from_config(&config.backend);
        let debounce = Duration::from_millis(config.search.debounce_ms);
        Self {
            dashboard: dashboard::DashboardService::new(api.clone()),
            courses: console::CourseConsole::new(
                api.clone(),
                debounce,
                Box::new(console::StdinConfirm),
            ),
            users: console::UserConsole::new(api.clone(), Box::new(console::StdinConfirm)),
            professors: console::ProfessorConsole::new(api, Box::new(console::StdinConfirm)),
            config: Arc::new(config),
        }
    }
}
