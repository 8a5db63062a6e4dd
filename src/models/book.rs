//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sequential book identifier, starting at 1
pub type BookId = u32;

/// Catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// False while exactly one user holds the book
    pub available: bool,
    /// Excerpt, only kept when content storage is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Short book representation for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookShort {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            available: book.available,
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(max = 49, message = "Title must be at most 49 characters"))]
    pub title: String,
    #[validate(length(max = 29, message = "Author must be at most 29 characters"))]
    pub author: String,
    #[validate(length(max = 14, message = "ISBN must be at most 14 characters"))]
    pub isbn: String,
    #[validate(length(max = 499, message = "Content must be at most 499 characters"))]
    pub content: Option<String>,
}

impl CreateBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
