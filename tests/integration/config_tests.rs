//! Configuration loading tests

use elidune_lending::{LibraryConfig, LibrarySystem};

#[test]
fn test_load_default_file() {
    let config = LibraryConfig::load().expect("Failed to load configuration");
    assert_eq!(config.limits.max_borrowed, 5);
    assert_eq!(config.admin_username(), "Admin123@");

    let system = LibrarySystem::from_config(config).expect("Failed to build library");
    assert_eq!(system.list_books().count(), 2);
}
