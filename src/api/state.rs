use std::sync::Arc;

use crate::{
    db::{CustomerRepository, InMemoryCustomerRepository},
    services::{CustomerService, MovieClient},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
}

impl AppState {
    pub fn new(repository: Arc<dyn CustomerRepository>, movie_client: Arc<dyn MovieClient>) -> Self {
        Self {
            customers: CustomerService::new(repository, movie_client),
        }
    }

    /// State backed by the seeded in-memory customer store
    pub fn in_memory(movie_client: Arc<dyn MovieClient>) -> Self {
        Self::new(Arc::new(InMemoryCustomerRepository::seeded()), movie_client)
    }
}
