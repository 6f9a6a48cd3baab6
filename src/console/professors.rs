//! Faculty administration console

use crate::error::ConsoleResult;
use crate::form::ProfessorForm;
use crate::gateway::{ApiClient, ProfessorGateway};
use crate::models::Professor;
use crate::store::{Confirm, EntityStore};

pub struct ProfessorConsole {
    store: EntityStore<ProfessorGateway>,
    form: ProfessorForm,
    confirm: Box<dyn Confirm + Send + Sync>,
}

impl ProfessorConsole {
    pub fn new(api: ApiClient, confirm: Box<dyn Confirm + Send + Sync>) -> Self {
        Self {
            store: EntityStore::new(ProfessorGateway::new(api)),
            form: ProfessorForm::default(),
            confirm,
        }
    }

    pub async fn load(&mut self) -> ConsoleResult<()> {
        self.store.load().await
    }

    pub fn professors(&self) -> &[Professor] {
        self.store.items()
    }

    pub fn selected(&self) -> Option<&Professor> {
        self.store.selected()
    }

    pub fn form(&self) -> &ProfessorForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfessorForm {
        &mut self.form
    }

    pub fn edit(&mut self, professor: Professor) {
        self.form.edit(&professor);
        self.store.select(Some(professor));
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.store.select(None);
    }

    pub async fn save(&mut self) -> ConsoleResult<Professor> {
        let draft = self.form.submit()?;
        let saved = self.store.commit(&draft).await?;
        self.form.reset();
        Ok(saved)
    }

    pub async fn delete(&mut self, id: i64) -> ConsoleResult<()> {
        self.store.remove(id, self.confirm.as_ref()).await?;
        if self.form.editing() == Some(id) {
            self.form.reset();
        }
        Ok(())
    }
}
