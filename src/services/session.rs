//! Session tracking for the single active user

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserId},
    repository::users::UsersRepository,
};

/// Holds the id of the authenticated user, resolved through the registry on demand
#[derive(Debug, Clone, Default)]
pub struct Session {
    active_user: Option<UserId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate and make the user active.
    /// A failed attempt leaves any existing session untouched.
    pub fn login<'a>(&mut self, users: &'a UsersRepository, username: &str, password: &str) -> AppResult<&'a User> {
        match users.authenticate(username, password) {
            Ok(user) => {
                if let Some(previous) = self.active_user.replace(user.id) {
                    tracing::debug!("Session: replacing active user id={}", previous);
                }
                tracing::info!("User {} logged in", user.username);
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("Failed login attempt for {}", username);
                Err(e)
            }
        }
    }

    /// Always succeeds, even with no active user
    pub fn logout(&mut self) {
        if let Some(id) = self.active_user.take() {
            tracing::info!("User id={} logged out", id);
        }
    }

    /// Drop the active reference after the user registry is reset
    pub fn invalidate(&mut self) {
        self.active_user = None;
    }

    pub fn active_user_id(&self) -> Option<UserId> {
        self.active_user
    }

    pub fn current<'a>(&self, users: &'a UsersRepository) -> Option<&'a User> {
        self.active_user.and_then(|id| users.get_by_id(id).ok())
    }

    /// The active user, or `NotAuthenticated`
    pub fn require<'a>(&self, users: &'a UsersRepository) -> AppResult<&'a User> {
        self.current(users).ok_or(AppError::NotAuthenticated)
    }
}
