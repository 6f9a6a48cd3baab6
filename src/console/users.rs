//! User administration console

use crate::error::ConsoleResult;
use crate::form::UserForm;
use crate::gateway::{ApiClient, UserGateway};
use crate::models::User;
use crate::store::{Confirm, EntityStore};

pub struct UserConsole {
    store: EntityStore<UserGateway>,
    form: UserForm,
    confirm: Box<dyn Confirm + Send + Sync>,
}

impl UserConsole {
    pub fn new(api: ApiClient, confirm: Box<dyn Confirm + Send + Sync>) -> Self {
        Self {
            store: EntityStore::new(UserGateway::new(api)),
            form: UserForm::default(),
            confirm,
        }
    }

    pub async fn load(&mut self) -> ConsoleResult<()> {
        self.store.load().await
    }

    pub fn users(&self) -> &[User] {
        self.store.items()
    }

    pub fn selected(&self) -> Option<&User> {
        self.store.selected()
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    /// Show the detail pane without touching the add form.
    pub fn select(&mut self, user: Option<User>) {
        self.store.select(user);
    }

    /// Load a user into the form for editing (enrollment toggling).
    pub fn edit(&mut self, user: User) {
        self.form.edit(&user);
        self.store.select(Some(user));
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.store.select(None);
    }

    pub async fn save(&mut self) -> ConsoleResult<User> {
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
