//! Thread-safe handle for hosts that drive the library from several threads

use std::sync::{Arc, Mutex};

use crate::{
    error::{AppError, AppResult},
    system::LibrarySystem,
};

/// One lock guards the whole library state, so operations are serialized
#[derive(Debug, Clone)]
pub struct SharedLibrary {
    inner: Arc<Mutex<LibrarySystem>>,
}

impl SharedLibrary {
    pub fn new(system: LibrarySystem) -> Self {
        Self {
            inner: Arc::new(Mutex::new(system)),
        }
    }

    /// Run `f` with exclusive access to the library
    pub fn with<R>(&self, f: impl FnOnce(&mut LibrarySystem) -> R) -> AppResult<R> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| AppError::Internal("Library lock poisoned".to_string()))?;
        Ok(f(&mut *guard))
    }
}

impl From<LibrarySystem> for SharedLibrary {
    fn from(system: LibrarySystem) -> Self {
        Self::new(system)
    }
}
