//! End-to-end lending tests

use elidune_lending::{
    models::{BookShort, UserShort},
    AppError, ErrorCode, LibraryConfig, LibrarySystem,
};
use serde_json::Value;

fn library() -> LibrarySystem {
    let mut config = LibraryConfig::default();
    config.limits.max_books = 10;
    let mut system = LibrarySystem::from_config(config).expect("Failed to build library");

    system.login("Admin123@", "admin123").expect("Admin login failed");
    for (title, author, isbn) in [
        ("Dune", "Frank Herbert", "9780441013593"),
        ("Emma", "Jane Austen", "9780141439587"),
        ("Ulysses", "James Joyce", "9780199535675"),
        ("Beloved", "Toni Morrison", "9781400033416"),
    ] {
        system.add_book(title, author, isbn, None).expect("Failed to add book");
    }
    system.logout();
    system
}

/// Availability must mirror exactly one holder
fn assert_consistent(system: &LibrarySystem) {
    for book in system.list_books() {
        let holders = system
            .repository()
            .users
            .list()
            .filter(|user| user.has_borrowed(book.id))
            .count();
        assert_eq!(holders, usize::from(!book.available), "book {}", book.id);
    }
}

#[test]
fn test_walkthrough() {
    let mut system = library();
    assert_eq!(system.list_books().count(), 6);

    system.register("Validu1@", "pw", "N").unwrap();
    assert!(matches!(
        system.register("Validu1@", "pw2", "N2"),
        Err(AppError::DuplicateUsername(_))
    ));
    assert!(matches!(system.register("nodigits", "pw", "N"), Err(AppError::InvalidUsername(_))));

    let user = system.login("Validu1@", "pw").unwrap();
    assert_eq!(user.name, "N");

    for id in [5, 2, 6] {
        system.borrow(id).unwrap();
    }
    assert_consistent(&system);

    system.return_book(2).unwrap();
    let mine: Vec<u32> = system.my_books().unwrap().iter().map(|b| b.id).collect();
    assert_eq!(mine, vec![5, 6]);
    assert_consistent(&system);

    let available: Vec<u32> = system.list_available_books().map(|b| b.id).collect();
    assert_eq!(available, vec![1, 2, 3, 4]);
}

#[test]
fn test_one_holder_per_book() {
    let mut system = library();
    system.login("User1#1", "password").unwrap();
    system.borrow(3).unwrap();

    system.login("Admin123@", "admin123").unwrap();
    assert_eq!(ErrorCode::of(&system.borrow(3)), ErrorCode::BookUnavailable);
    assert_eq!(ErrorCode::of(&system.return_book(3)), ErrorCode::NotBorrowedByUser);

    system.login("User1#1", "password").unwrap();
    system.return_book(3).unwrap();

    system.login("Admin123@", "admin123").unwrap();
    assert!(system.borrow(3).is_ok());
    assert_consistent(&system);
}

#[test]
fn test_sixth_borrow_rejected() {
    let mut system = library();
    system.login("User1#1", "password").unwrap();
    for id in 1..=5 {
        system.borrow(id).unwrap();
    }

    let before: Vec<bool> = system.list_books().map(|b| b.available).collect();
    assert!(matches!(system.borrow(6), Err(AppError::BorrowLimitExceeded(5))));
    let after: Vec<bool> = system.list_books().map(|b| b.available).collect();
    assert_eq!(before, after);
    assert_eq!(system.current_user().unwrap().borrowed.len(), 5);
}

#[test]
fn test_failed_login_keeps_session() {
    let mut system = library();
    system.login("User1#1", "password").unwrap();
    assert_eq!(ErrorCode::of(&system.login("User1#1", "nope")), ErrorCode::InvalidCredentials);
    assert_eq!(system.current_user().unwrap().username, "User1#1");
}

#[test]
fn test_only_admin_adds_books() {
    let mut system = library();
    system.login("User1#1", "password").unwrap();
    assert!(matches!(
        system.add_book("Dune", "Frank Herbert", "9780441013593", None),
        Err(AppError::NotAuthorized(_))
    ));
    assert_eq!(system.list_books().count(), 6);
}

#[test]
fn test_catalog_capacity() {
    let mut config = LibraryConfig::default();
    config.limits.max_books = 3;
    let mut system = LibrarySystem::from_config(config).unwrap();
    system.login("Admin123@", "admin123").unwrap();

    assert_eq!(system.add_book("", "", "9780452284234", None).unwrap().id, 3);
    assert_eq!(
        ErrorCode::of(&system.add_book("Dune", "Frank Herbert", "9780441013593", None)),
        ErrorCode::CapacityExceeded
    );
}

#[test]
fn test_user_capacity() {
    let mut config = LibraryConfig::default();
    config.limits.max_users = 3;
    let mut system = LibrarySystem::from_config(config).unwrap();

    system.register("Third3c", "pw", "Third").unwrap();
    assert_eq!(
        ErrorCode::of(&system.register("Fourth4d", "pw", "Fourth")),
        ErrorCode::CapacityExceeded
    );
    assert_eq!(system.repository().users.count(), 3);
}

#[test]
fn test_read_borrowed_content() {
    let mut system = LibrarySystem::from_config(LibraryConfig::default()).unwrap();
    system.login("User1#1", "password").unwrap();
    assert!(matches!(system.read_content(2), Err(AppError::NotBorrowedByUser(2))));

    system.borrow(2).unwrap();
    assert!(system.read_content(2).unwrap().starts_with("It was a bright cold day in April"));
}

#[test]
fn test_legacy_variant() {
    let mut config = LibraryConfig::default();
    config.features.enforce_username_composition = false;
    let mut system = LibrarySystem::from_config(config).unwrap();

    system.register("plainname", "pw", "Plain").unwrap();
    system.login("admin", "admin123").unwrap();
    assert!(system.is_admin());
    assert!(system.add_book("Dune", "Frank Herbert", "9780441013593", None).is_ok());
}

#[test]
fn test_views_serialize_without_password() {
    let mut system = library();
    system.login("User1#1", "password").unwrap();
    system.borrow(1).unwrap();

    let user: Value = serde_json::to_value(system.current_user().unwrap()).unwrap();
    assert!(user.get("password").is_none());
    assert_eq!(user["borrowed"], serde_json::json!([1]));

    let loans = system.active_loans().unwrap();
    assert_eq!(loans.len(), 1);
    let loan: Value = serde_json::to_value(&loans[0]).unwrap();
    assert_eq!(loan["book"]["title"], "The Great Gatsby");
    assert_eq!(loan["user"]["nb_loans"], 1);

    let short = UserShort::from(system.current_user().unwrap());
    assert_eq!(short.username, "User1#1");
    let book = BookShort::from(system.find_book(1).unwrap());
    assert!(!book.available);
}
