//! User registry: bounded, append-only account storage

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserId},
    services::credentials::is_valid_username,
};

#[derive(Debug, Clone)]
pub struct UsersRepository {
    users: Vec<User>,
    capacity: usize,
    enforce_username_composition: bool,
}

impl UsersRepository {
    pub fn new(capacity: usize, enforce_username_composition: bool) -> Self {
        Self {
            users: Vec::new(),
            capacity,
            enforce_username_composition,
        }
    }

    /// Register a new account.
    ///
    /// Checks run in a fixed order, so the first failing one is reported:
    /// capacity, username composition, field lengths, then uniqueness.
    pub fn create(&mut self, user: CreateUser) -> AppResult<&User> {
        if self.is_full() {
            return Err(AppError::CapacityExceeded {
                registry: "user registry",
                capacity: self.capacity,
            });
        }

        if self.enforce_username_composition && !is_valid_username(&user.username) {
            return Err(AppError::InvalidUsername(
                "Username must contain at least one lowercase letter, one uppercase letter and one digit, \
                 and may only include the special characters - / @ #"
                    .to_string(),
            ));
        }

        user.validate()?;

        if self.get_by_username(&user.username).is_some() {
            return Err(AppError::DuplicateUsername(user.username));
        }

        let index = self.users.len();
        let id = UserId::try_from(index + 1).map_err(|_| AppError::CapacityExceeded {
            registry: "user registry",
            capacity: self.capacity,
        })?;

        self.users.push(User {
            id,
            username: user.username,
            password: user.password,
            name: user.name,
            borrowed: Vec::new(),
        });

        Ok(&self.users[index])
    }

    /// Exact match on both username and password
    pub fn authenticate(&self, username: &str, password: &str) -> AppResult<&User> {
        self.users
            .iter()
            .find(|user| user.username == username && user.verify_password(password))
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))
    }

    /// Get user by ID
    pub fn get_by_id(&self, id: UserId) -> AppResult<&User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    pub(crate) fn get_by_id_mut(&mut self, id: UserId) -> AppResult<&mut User> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Case-sensitive username lookup
    pub fn get_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    /// All users in registration order
    pub fn list(&self) -> impl Iterator<Item = &User> + Clone + '_ {
        self.users.iter()
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.users.len() >= self.capacity
    }

    pub(crate) fn clear(&mut self) {
        self.users.clear();
    }
}
