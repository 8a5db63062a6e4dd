//! Library system: registries, session and services of one library instance

use crate::{
    config::LibraryConfig,
    error::AppResult,
    models::{
        book::{Book, BookId, CreateBook},
        loan::{Loan, LoanDetails},
        user::{CreateUser, User},
    },
    repository::Repository,
    seed,
    services::{session::Session, Services},
};

/// Entry point for the presentation layer. Inputs are already trimmed
/// strings and parsed integers.
#[derive(Debug, Clone)]
pub struct LibrarySystem {
    config: LibraryConfig,
    repository: Repository,
    session: Session,
    services: Services,
}

impl LibrarySystem {
    /// Empty registries, nobody logged in
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            repository: Repository::new(&config),
            session: Session::new(),
            services: Services::new(&config),
            config,
        }
    }

    /// Build a system, seeding it when `features.seed_sample_data` is set
    pub fn from_config(config: LibraryConfig) -> AppResult<Self> {
        let mut system = Self::new(config);
        if system.config.features.seed_sample_data {
            seed::populate(&mut system.repository, &system.config)?;
        }
        Ok(system)
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Read-only access to the registries
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn register(&mut self, username: &str, password: &str, name: &str) -> AppResult<&User> {
        let user = self
            .repository
            .users
            .create(CreateUser::new(username, password, name))?;
        tracing::info!("Registered user {} (id={})", user.username, user.id);
        Ok(user)
    }

    pub fn login(&mut self, username: &str, password: &str) -> AppResult<&User> {
        self.session.login(&self.repository.users, username, password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current(&self.repository.users)
    }

    /// Admin-only. `content` is dropped when content storage is disabled.
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str, content: Option<&str>) -> AppResult<&Book> {
        let mut book = CreateBook::new(title, author, isbn);
        book.content = content.map(str::to_string);
        self.services
            .catalog
            .create_book(&mut self.repository, &self.session, book)
    }

    pub fn list_books(&self) -> impl Iterator<Item = &Book> + Clone + '_ {
        self.repository.books.list_all()
    }

    pub fn list_available_books(&self) -> impl Iterator<Item = &Book> + Clone + '_ {
        self.repository.books.list_available()
    }

    pub fn find_book(&self, id: BookId) -> AppResult<&Book> {
        self.repository.books.get_by_id(id)
    }

    pub fn borrow(&mut self, book_id: BookId) -> AppResult<Loan> {
        self.services
            .loans
            .borrow(&mut self.repository, &self.session, book_id)
    }

    pub fn return_book(&mut self, book_id: BookId) -> AppResult<Loan> {
        self.services
            .loans
            .return_book(&mut self.repository, &self.session, book_id)
    }

    /// The active user's books, oldest loan first
    pub fn my_books(&self) -> AppResult<Vec<&Book>> {
        self.services.loans.get_user_books(&self.repository, &self.session)
    }

    pub fn read_content(&self, book_id: BookId) -> AppResult<&str> {
        self.services
            .loans
            .read_content(&self.repository, &self.session, book_id)
    }

    pub fn active_loans(&self) -> AppResult<Vec<LoanDetails>> {
        self.services.loans.list_active(&self.repository)
    }

    /// Whether the active user is the admin identity
    pub fn is_admin(&self) -> bool {
        self.current_user()
            .map(|user| self.services.catalog.is_admin(user))
            .unwrap_or(false)
    }

    /// Drop every book and user; the session is invalidated with them
    pub fn reset(&mut self) {
        self.repository.clear();
        self.session.invalidate();
        tracing::info!("Library state reset");
    }
}
