//! Multi-threaded access through the shared handle

use std::thread;

use elidune_lending::{LibraryConfig, LibrarySystem, SharedLibrary};

#[test]
fn test_concurrent_borrows_are_serialized() {
    let system = LibrarySystem::from_config(LibraryConfig::default()).unwrap();
    let shared = SharedLibrary::new(system);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let (username, password) = if i % 2 == 0 {
                    ("Admin123@", "admin123")
                } else {
                    ("User1#1", "password")
                };
                shared
                    .with(|library| {
                        library.login(username, password).is_ok() && library.borrow(1).is_ok()
                    })
                    .unwrap()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|&ok| ok)
        .count();
    assert_eq!(successes, 1);

    let holders = shared
        .with(|library| library.active_loans().unwrap().len())
        .unwrap();
    assert_eq!(holders, 1);
}
