//! Business logic services

pub mod catalog;
pub mod credentials;
pub mod loans;
pub mod session;

use crate::config::LibraryConfig;

/// Container for all services
#[derive(Debug, Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
}

impl Services {
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(config.admin_username()),
            loans: loans::LoansService::new(config.limits.max_borrowed),
        }
    }
}
