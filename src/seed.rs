//! Sample catalog and accounts loaded at startup

use crate::{
    config::LibraryConfig,
    error::AppResult,
    models::{book::CreateBook, user::CreateUser},
    repository::Repository,
};

struct SampleBook {
    title: &'static str,
    author: &'static str,
    isbn: &'static str,
    excerpt: &'static str,
}

const SAMPLE_BOOKS: [SampleBook; 2] = [
    SampleBook {
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        isbn: "9780743273565",
        excerpt: "In my younger and more vulnerable years my father gave me some advice...",
    },
    SampleBook {
        title: "1984",
        author: "George Orwell",
        isbn: "9780452284234",
        excerpt: "It was a bright cold day in April, and the clocks were striking thirteen...",
    },
];

/// Sample reader account, per username rule variant
const SAMPLE_READER: (&str, &str, &str) = ("User1#1", "password", "John Doe");
const LEGACY_SAMPLE_READER: (&str, &str, &str) = ("user1", "password", "John Doe");

const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_NAME: &str = "Admin User";

/// Load the sample books and the admin and reader accounts
pub fn populate(repository: &mut Repository, config: &LibraryConfig) -> AppResult<()> {
    for sample in &SAMPLE_BOOKS {
        let book = CreateBook::new(sample.title, sample.author, sample.isbn).with_content(sample.excerpt);
        repository.books.create(book)?;
    }

    repository
        .users
        .create(CreateUser::new(config.admin_username(), ADMIN_PASSWORD, ADMIN_NAME))?;

    let (username, password, name) = if config.features.enforce_username_composition {
        SAMPLE_READER
    } else {
        LEGACY_SAMPLE_READER
    };
    repository.users.create(CreateUser::new(username, password, name))?;

    tracing::info!(
        "Seeded {} books and {} users",
        repository.books.count(),
        repository.users.count()
    );
    Ok(())
}
