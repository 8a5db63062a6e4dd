//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook},
        user::User,
    },
    repository::Repository,
    services::session::Session,
};

#[derive(Debug, Clone)]
pub struct CatalogService {
    admin_username: String,
}

impl CatalogService {
    pub fn new(admin_username: impl Into<String>) -> Self {
        Self {
            admin_username: admin_username.into(),
        }
    }

    /// Identity check against the reserved admin username
    pub fn is_admin(&self, user: &User) -> bool {
        user.username == self.admin_username
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    /// Add a book on behalf of the active user, who must be the admin
    pub fn create_book<'a>(
        &self,
        repository: &'a mut Repository,
        session: &Session,
        book: CreateBook,
    ) -> AppResult<&'a Book> {
        let user = session.require(&repository.users)?;
        if !self.is_admin(user) {
            tracing::warn!("User {} attempted to add a book", user.username);
            return Err(AppError::NotAuthorized("Only the admin can add books".to_string()));
        }

        let book = repository.books.create(book)?;
        tracing::info!("Catalog: added \"{}\" (id={})", book.title, book.id);
        Ok(book)
    }
}
