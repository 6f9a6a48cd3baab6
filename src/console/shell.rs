//! Line-oriented command shell over the entity consoles.
//!
//! Mirrors the pages of the web console: a course catalog with search
//! and professor filter, user administration, faculty administration
//! and the dashboard.

use std::io::{self, BufRead, Write};

use crate::error::ConsoleError;
use crate::models::{Entity, Role};
use crate::Console;

pub struct Shell {
    console: Console,
}

impl Shell {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    /// Read-eval loop. Every error surfaces as a single notification,
    /// except a declined confirmation, which is a quiet no-op.
    pub async fn run(&mut self) -> io::Result<()> {
        println!("Lectern console. Type 'help' for commands.");
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "quit" | "exit") {
                return Ok(());
            }
            if let Err(err) = self.dispatch(line).await {
                match err {
                    ConsoleError::Cancelled => {}
                    other => println!("Operation failed: {}", other),
                }
            }
        }
    }

    async fn dispatch(&mut self, line: &str) -> crate::ConsoleResult<()> {
        let (command, rest) = match line.split_once(' ') {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };
        match command {
            "help" => {
                print_help();
                Ok(())
            }
            "dashboard" => self.show_dashboard().await,
            "courses" => self.courses_command(rest).await,
            "course" => self.course_command(rest).await,
            "users" => self.list_users().await,
            "user" => self.user_command(rest).await,
            "professors" => self.list_professors().await,
            "professor" => self.professor_command(rest).await,
            _ => {
                println!("Unknown command: {} (try 'help')", command);
                Ok(())
            }
        }
    }

    async fn show_dashboard(&mut self) -> crate::ConsoleResult<()> {
        let summary = self.console.dashboard.overview().await?;
        println!(
            "Courses: {}  Users: {}  Professors: {}",
            summary.courses_total, summary.users_total, summary.professors_total
        );
        println!("Users per course:");
        for entry in &summary.users_per_course {
            println!("  {:<30} {}", entry.title, entry.users);
        }
        println!("Courses by category:");
        for entry in &summary.courses_by_category {
            println!("  {:<30} {}", entry.label, entry.value);
        }
        println!("Recent courses:");
        for row in &summary.recent_courses {
            println!("  {:<30} {:<20} {}", row.title, row.author, row.category);
        }
        Ok(())
    }

    async fn courses_command(&mut self, rest: &str) -> crate::ConsoleResult<()> {
        let courses = &mut self.console.courses;
        if !rest.is_empty() && courses.professors().is_empty() {
            // first visit pulls the professor snapshot alongside
            courses.load().await?;
        }
        match rest.split_once(' ') {
            None if rest.is_empty() => courses.load().await?,
            None if rest == "filter" => courses.filter_professor(None).await?,
            Some(("search", keyword)) => courses.search_input(keyword.trim()).await?,
            Some(("filter", id)) => {
                let id = id.trim().parse::<i64>().ok();
                courses.filter_professor(id).await?;
            }
            _ => {
                println!("Usage: courses [search <keyword> | filter <professorId>]");
                return Ok(());
            }
        }
        for course in courses.courses().to_vec() {
            println!(
                "#{:<4} {:<30} {:<12} {}",
                course.id,
                course.title,
                course.display_category(),
                courses.professor_name(course.author_id)
            );
        }
        Ok(())
    }

    async fn course_command(&mut self, rest: &str) -> crate::ConsoleResult<()> {
        match rest.split_once(' ') {
            Some(("add", fields)) => {
                let mut parts = fields.split(';');
                let console = &mut self.console.courses;
                console.reset();
                let form = console.form_mut();
                form.title = parts.next().unwrap_or_default().trim().to_string();
                form.category = parts.next().unwrap_or_default().trim().to_string();
                form.author_id = parts.next().unwrap_or_default().trim().to_string();
                form.description = parts.next().unwrap_or_default().trim().to_string();
                let saved = console.save().await?;
                println!("Created course #{}", saved.id);
            }
            Some(("edit", args)) => {
                let mut words = args.splitn(3, ' ');
                let id = parse_id(words.next())?;
                let field = words.next().unwrap_or_default().to_string();
                let value = words.next().unwrap_or_default().to_string();
                let console = &mut self.console.courses;
                if console.courses().is_empty() {
                    console.load().await?;
                }
                let course = console
                    .courses()
                    .iter()
                    .find(|c| c.id == id)
                    .cloned()
                    .ok_or_else(|| ConsoleError::Validation(format!("No course #{}", id)))?;
                console.edit(course);
                let form = console.form_mut();
                match field.as_str() {
                    "title" => form.title = value,
                    "category" => form.category = value,
                    "description" => form.description = value,
                    "author" => form.author_id = value,
                    other => {
                        println!("Unknown field: {}", other);
                        console.reset();
                        return Ok(());
                    }
                }
                console.save().await?;
                println!("Saved course #{}", id);
            }
            Some(("rm", id)) => {
                let id = parse_id(Some(id))?;
                self.console.courses.delete(id).await?;
                println!("Deleted course #{}", id);
            }
            _ => println!(
                "Usage: course add <title>;<category>;<authorId>[;<description>] \
                 | course edit <id> <field> <value> | course rm <id>"
            ),
        }
        Ok(())
    }

    async fn list_users(&mut self) -> crate::ConsoleResult<()> {
        self.console.users.load().await?;
        for user in self.console.users.users() {
            println!(
                "#{:<4} {:<24} {:<28} {:<8} courses={:?}",
                user.id, user.name, user.email, user.role, user.course_ids
            );
        }
        Ok(())
    }

    async fn user_command(&mut self, rest: &str) -> crate::ConsoleResult<()> {
        match rest.split_once(' ') {
            Some(("add", fields)) => {
                let mut parts = fields.split(';');
                let console = &mut self.console.users;
                console.reset();
                let form = console.form_mut();
                form.name = parts.next().unwrap_or_default().trim().to_string();
                form.email = parts.next().unwrap_or_default().trim().to_string();
                if let Some(role) = parts.next() {
                    form.role = role
                        .trim()
                        .parse::<Role>()
                        .map_err(ConsoleError::Validation)?;
                }
                let saved = console.save().await?;
                println!("Created user #{}", saved.id);
            }
            Some(("toggle", args)) => {
                let mut words = args.split_whitespace();
                let user_id = parse_id(words.next())?;
                let course_id = parse_id(words.next())?;
                let console = &mut self.console.users;
                console.load().await?;
                let user = console
                    .users()
                    .iter()
                    .find(|u| u.id() == user_id)
                    .cloned()
                    .ok_or_else(|| ConsoleError::Validation(format!("No user #{}", user_id)))?;
                console.edit(user);
                console.form_mut().toggle_course(course_id);
                console.save().await?;
                println!("Toggled course {} for user #{}", course_id, user_id);
            }
            Some(("rm", id)) => {
                let id = parse_id(Some(id))?;
                self.console.users.delete(id).await?;
                println!("Deleted user #{}", id);
            }
            _ => println!(
                "Usage: user add <name>;<email>[;<role>] | user toggle <userId> <courseId> \
                 | user rm <id>"
            ),
        }
        Ok(())
    }

    async fn list_professors(&mut self) -> crate::ConsoleResult<()> {
        self.console.professors.load().await?;
        for professor in self.console.professors.professors() {
            println!("#{:<4} {:<24} {}", professor.id, professor.name, professor.bio);
            if !professor.skills.is_empty() {
                println!("      skills: {}", professor.skills.join(", "));
            }
            for (title, year) in &professor.publications {
                println!("      {} ({})", title, year);
            }
        }
        Ok(())
    }

    async fn professor_command(&mut self, rest: &str) -> crate::ConsoleResult<()> {
        match rest.split_once(' ') {
            Some(("add", fields)) => {
                let mut parts = fields.split(';');
                let console = &mut self.console.professors;
                console.reset();
                let form = console.form_mut();
                form.name = parts.next().unwrap_or_default().trim().to_string();
                form.bio = parts.next().unwrap_or_default().trim().to_string();
                for (i, skill) in parts.next().unwrap_or_default().split(',').enumerate() {
                    if i > 0 {
                        form.add_skill();
                    }
                    form.set_skill(i, skill.trim());
                }
                for (i, pair) in parts.next().unwrap_or_default().split(',').enumerate() {
                    if i > 0 {
                        form.add_publication();
                    }
                    if let Some((title, year)) = pair.split_once('=') {
                        form.set_publication_title(i, title.trim());
                        form.set_publication_year(i, year.trim());
                    }
                }
                let saved = console.save().await?;
                println!("Created professor #{}", saved.id);
            }
            Some(("rm", id)) => {
                let id = parse_id(Some(id))?;
                self.console.professors.delete(id).await?;
                println!("Deleted professor #{}", id);
            }
            _ => println!(
                "Usage: professor add <name>;<bio>[;<skill,...>][;<title=year,...>] \
                 | professor rm <id>"
            ),
        }
        Ok(())
    }
}

fn parse_id(word: Option<&str>) -> crate::ConsoleResult<i64> {
    word.unwrap_or_default()
        .trim()
        .parse::<i64>()
        .map_err(|_| ConsoleError::Validation("A numeric id is required".to_string()))
}

fn print_help() {
    println!(
        "\
Commands:
  dashboard                                         aggregate counts, charts, recent courses
  courses [search <keyword> | filter <profId>]      list / server-side search / filter
  course add <title>;<category>;<authorId>[;<desc>] create a course
  course edit <id> <field> <value>                  update one field (title|category|description|author)
  course rm <id>                                    delete a course (asks for confirmation)
  users                                             list users
  user add <name>;<email>[;<role>]                  create a user (student|visitor|admin)
  user toggle <userId> <courseId>                   toggle a student's enrollment
  user rm <id>                                      delete a user (asks for confirmation)
  professors                                        list faculty
  professor add <name>;<bio>[;skills][;pubs]        create a professor (pubs: title=year,...)
  professor rm <id>                                 delete a professor (asks for confirmation)
  quit"
    );
}
