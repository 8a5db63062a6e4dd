//! Repository layer: in-memory registries

pub mod books;
pub mod users;

use crate::config::LibraryConfig;

/// Owns every book and user record of one library instance
#[derive(Debug, Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create empty registries sized from the configuration
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            books: books::BooksRepository::new(config.limits.max_books, config.features.store_content),
            users: users::UsersRepository::new(
                config.limits.max_users,
                config.features.enforce_username_composition,
            ),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.books.clear();
        self.users.clear();
    }
}
