//! User model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::BookId;

/// Sequential user identifier, starting at 1
pub type UserId = u32;

/// Registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    /// Borrowed book ids, oldest first
    pub borrowed: Vec<BookId>,
}

impl User {
    /// Exact, case-sensitive password comparison
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn has_borrowed(&self, book_id: BookId) -> bool {
        self.borrowed.contains(&book_id)
    }

    pub fn nb_loans(&self) -> usize {
        self.borrowed.len()
    }
}

/// Short user representation for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserShort {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub nb_loans: usize,
}

impl From<&User> for UserShort {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            nb_loans: user.nb_loans(),
        }
    }
}

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(max = 19, message = "Username must be at most 19 characters"))]
    pub username: String,
    #[validate(length(max = 19, message = "Password must be at most 19 characters"))]
    pub password: String,
    #[validate(length(max = 29, message = "Name must be at most 29 characters"))]
    pub name: String,
}

impl CreateUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}
