//! Loan (borrow) model and related types

use serde::Serialize;

use super::book::{BookId, BookShort};
use super::user::{UserId, UserShort};

/// A single book held by a single user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Loan {
    pub user_id: UserId,
    pub book_id: BookId,
}

/// Loan with full details for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanDetails {
    pub book: BookShort,
    pub user: UserShort,
}
