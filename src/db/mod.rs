//! Customer persistence
//!
//! The repository trait keeps handlers independent of the backing store.
//! Postgres is used when a database URL is configured; otherwise the service
//! runs against a seeded in-memory store.

use crate::{
    error::AppResult,
    models::{Customer, Genre},
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCustomerRepository;
pub use postgres::{create_pool, PgCustomerRepository};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Looks up a customer by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Customer>>;

    /// Replaces the customer's genre preference
    ///
    /// Returns `false` when no customer with this id exists.
    async fn update_genre(&self, id: i64, genre: Genre) -> AppResult<bool>;

    /// Verifies the store is reachable, for health reporting
    async fn ping(&self) -> AppResult<()>;

    /// Store name for logging and health output
    fn name(&self) -> &'static str;
}

/// Customers present in a fresh deployment, mirrored by the initial migration
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "sam", Genre::Action),
        Customer::new(2, "mike", Genre::Drama),
        Customer::new(3, "jake", Genre::Comedy),
    ]
}
