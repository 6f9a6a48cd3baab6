//! Entity consoles: the per-collection glue binding a store, a form
//! session and the resolver, one console per page of the original UI.

pub mod courses;
pub mod professors;
pub mod shell;
pub mod users;

pub use courses::CourseConsole;
pub use professors::ProfessorConsole;
pub use users::UserConsole;

use std::io::{self, BufRead, Write};

use crate::store::Confirm;

/// Blocking yes/no prompt on the controlling terminal.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut out = io::stdout();
        // An unreadable or unwritable prompt counts as a decline.
        if write!(out, "{} [y/N] ", prompt).and_then(|_| out.flush()).is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}
