//! Elidune Lending
//!
//! In-memory library core: a bounded catalog, a bounded user registry,
//! a single-user session and the borrow/return rules tying them together.
//! Menus, prompts and input parsing belong to the caller.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;
pub mod shared;
pub mod system;

pub use config::LibraryConfig;
pub use error::{AppError, AppResult, ErrorCode};
pub use services::credentials::is_valid_username;
pub use shared::SharedLibrary;
pub use system::LibrarySystem;

/// Load `.env` and configuration, install logging and build the library
pub fn bootstrap() -> AppResult<LibrarySystem> {
    dotenvy::dotenv().ok();

    let config = LibraryConfig::load()?;
    logging::init(&config.logging)?;

    tracing::info!("Starting Elidune Lending v{}", env!("CARGO_PKG_VERSION"));
    LibrarySystem::from_config(config)
}
