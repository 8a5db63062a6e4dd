//! Data models for the lending core

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookId, BookShort, CreateBook};
pub use loan::{Loan, LoanDetails};
pub use user::{CreateUser, User, UserId, UserShort};
