//! Catalog registry: bounded, append-only book storage

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, CreateBook},
};

#[derive(Debug, Clone)]
pub struct BooksRepository {
    books: Vec<Book>,
    capacity: usize,
    store_content: bool,
}

impl BooksRepository {
    pub fn new(capacity: usize, store_content: bool) -> Self {
        Self {
            books: Vec::new(),
            capacity,
            store_content,
        }
    }

    /// Add a book. Ids are dense: the n-th book gets id n.
    /// Empty titles and duplicate ISBNs are accepted.
    pub fn create(&mut self, book: CreateBook) -> AppResult<&Book> {
        if self.is_full() {
            return Err(AppError::CapacityExceeded {
                registry: "catalog",
                capacity: self.capacity,
            });
        }

        book.validate()?;

        let index = self.books.len();
        let id = BookId::try_from(index + 1).map_err(|_| AppError::CapacityExceeded {
            registry: "catalog",
            capacity: self.capacity,
        })?;

        let content = if self.store_content { book.content } else { None };

        self.books.push(Book {
            id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            available: true,
            content,
        });

        tracing::debug!("Catalog: created book id={}", id);
        Ok(&self.books[index])
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: BookId) -> AppResult<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// All books in insertion order
    pub fn list_all(&self) -> impl Iterator<Item = &Book> + Clone + '_ {
        self.books.iter()
    }

    /// Books not currently on loan, in insertion order
    pub fn list_available(&self) -> impl Iterator<Item = &Book> + Clone + '_ {
        self.books.iter().filter(|book| book.available)
    }

    /// Only the lending service calls this; unknown ids are ignored.
    pub(crate) fn set_availability(&mut self, id: BookId, available: bool) {
        if let Some(book) = self.books.iter_mut().find(|book| book.id == id) {
            book.available = available;
        }
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.books.len() >= self.capacity
    }

    pub fn stores_content(&self) -> bool {
        self.store_content
    }

    pub(crate) fn clear(&mut self) {
        self.books.clear();
    }
}
