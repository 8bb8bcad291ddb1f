use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{
    db::CustomerRepository,
    error::AppResult,
    models::{Customer, Genre},
};

/// Customer store held in process memory
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<i64, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new(customers: impl IntoIterator<Item = Customer>) -> Self {
        Self {
            customers: RwLock::new(customers.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    /// Store pre-populated with the sample customers
    pub fn seeded() -> Self {
        Self::new(super::seed_customers())
    }
}

#[async_trait::async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn update_genre(&self, id: i64, genre: Genre) -> AppResult<bool> {
        let mut customers = self.customers.write().await;
        match customers.get_mut(&id) {
            Some(customer) => {
                customer.favorite_genre = genre;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
