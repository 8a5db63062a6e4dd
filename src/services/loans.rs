//! Loan management service
//!
//! A loan touches two records: the book's availability flag and the
//! borrower's list of held ids. Every precondition is checked before either
//! is written, so an operation either applies both changes or none.

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookId},
        loan::{Loan, LoanDetails},
    },
    repository::Repository,
    services::session::Session,
};

#[derive(Debug, Clone)]
pub struct LoansService {
    max_borrowed: usize,
}

impl LoansService {
    pub fn new(max_borrowed: usize) -> Self {
        Self { max_borrowed }
    }

    pub fn max_borrowed(&self) -> usize {
        self.max_borrowed
    }

    /// Lend a book to the active user
    pub fn borrow(&self, repository: &mut Repository, session: &Session, book_id: BookId) -> AppResult<Loan> {
        let user_id = session.require(&repository.users)?.id;
        let user = repository.users.get_by_id_mut(user_id)?;

        if user.borrowed.len() >= self.max_borrowed {
            tracing::warn!("User {} reached the borrow limit ({})", user.username, self.max_borrowed);
            return Err(AppError::BorrowLimitExceeded(self.max_borrowed));
        }

        if !repository.books.get_by_id(book_id)?.available {
            return Err(AppError::BookUnavailable(book_id));
        }

        repository.books.set_availability(book_id, false);
        user.borrowed.push(book_id);

        tracing::info!("User {} borrowed book id={}", user.username, book_id);
        Ok(Loan { user_id, book_id })
    }

    /// Take a book back from the active user
    pub fn return_book(&self, repository: &mut Repository, session: &Session, book_id: BookId) -> AppResult<Loan> {
        let user_id = session.require(&repository.users)?.id;
        let user = repository.users.get_by_id_mut(user_id)?;

        let position = user
            .borrowed
            .iter()
            .position(|&id| id == book_id)
            .ok_or(AppError::NotBorrowedByUser(book_id))?;

        let in_catalog = repository.books.get_by_id(book_id).is_ok();
        if !in_catalog {
            tracing::error!(
                "Book id={} is held by user {} but missing from the catalog",
                book_id,
                user.username
            );
        }
        debug_assert!(in_catalog, "borrowed book {} missing from catalog", book_id);
        if !in_catalog {
            return Err(AppError::Internal(format!(
                "Book {} is on loan but not in the catalog",
                book_id
            )));
        }

        // Vec::remove keeps the remaining loans in borrow order
        user.borrowed.remove(position);
        repository.books.set_availability(book_id, true);

        tracing::info!("User {} returned book id={}", user.username, book_id);
        Ok(Loan { user_id, book_id })
    }

    /// Books held by the active user, oldest loan first
    pub fn get_user_books<'a>(&self, repository: &'a Repository, session: &Session) -> AppResult<Vec<&'a Book>> {
        let user = session.require(&repository.users)?;
        user.borrowed
            .iter()
            .map(|&id| repository.books.get_by_id(id))
            .collect()
    }

    /// Stored excerpt of a book the active user currently holds
    pub fn read_content<'a>(&self, repository: &'a Repository, session: &Session, book_id: BookId) -> AppResult<&'a str> {
        let user = session.require(&repository.users)?;
        if !user.has_borrowed(book_id) {
            return Err(AppError::NotBorrowedByUser(book_id));
        }

        repository
            .books
            .get_by_id(book_id)?
            .content
            .as_deref()
            .ok_or(AppError::NoContent(book_id))
    }

    /// Every book currently on loan, grouped by borrower in registration order
    pub fn list_active(&self, repository: &Repository) -> AppResult<Vec<LoanDetails>> {
        let mut loans = Vec::new();
        for user in repository.users.list() {
            for &book_id in &user.borrowed {
                let book = repository.books.get_by_id(book_id)?;
                loans.push(LoanDetails {
                    book: book.into(),
                    user: user.into(),
                });
            }
        }
        Ok(loans)
    }

    /// Number of books currently on loan
    pub fn count_active(&self, repository: &Repository) -> usize {
        repository.users.list().map(|user| user.nb_loans()).sum()
    }
}
