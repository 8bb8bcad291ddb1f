use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};

use crate::{
    db::CustomerRepository,
    error::{AppError, AppResult},
    models::{Customer, Genre},
};

/// Creates a PostgreSQL connection pool and applies pending migrations
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    favorite_genre: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = AppError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let favorite_genre = row.favorite_genre.parse::<Genre>().map_err(|e| {
            AppError::Internal(format!("customer {} has invalid genre: {}", row.id, e))
        })?;

        Ok(Customer {
            id: row.id,
            name: row.name,
            favorite_genre,
        })
    }
}

/// Customer store backed by the `customer` table
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, favorite_genre FROM customer WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Customer::try_from).transpose()
    }

    async fn update_genre(&self, id: i64, genre: Genre) -> AppResult<bool> {
        let result = sqlx::query("UPDATE customer SET favorite_genre = $1 WHERE id = $2")
            .bind(genre.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
