use std::sync::Arc;

use tracing::instrument;

use crate::{
    db::CustomerRepository,
    error::{AppError, AppResult},
    models::{Customer, CustomerResponse, GenreUpdateRequest},
    services::movie_client::MovieClient,
};

/// Customer lookups, recommendation assembly and preference updates
#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
    movie_client: Arc<dyn MovieClient>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>, movie_client: Arc<dyn MovieClient>) -> Self {
        Self {
            repository,
            movie_client,
        }
    }

    pub fn repository(&self) -> &Arc<dyn CustomerRepository> {
        &self.repository
    }

    async fn find_customer(&self, id: i64) -> AppResult<Customer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::CustomerNotFound(id))
    }

    /// Loads the customer and attaches movies for their current genre
    ///
    /// The movie service is only called once the customer is known to exist.
    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: i64) -> AppResult<CustomerResponse> {
        let customer = self.find_customer(id).await?;
        let movies = self.movie_client.get_movies(customer.favorite_genre).await?;

        tracing::info!(
            customer_id = id,
            genre = %customer.favorite_genre,
            movies = movies.len(),
            "Customer assembled with recommendations"
        );

        Ok(CustomerResponse::new(customer, movies))
    }

    /// Replaces the customer's genre preference
    #[instrument(skip(self))]
    pub async fn update_genre(&self, id: i64, request: GenreUpdateRequest) -> AppResult<()> {
        if !self.repository.update_genre(id, request.genre).await? {
            return Err(AppError::CustomerNotFound(id));
        }

        tracing::info!(customer_id = id, genre = %request.genre, "Genre updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{InMemoryCustomerRepository, MockCustomerRepository},
        models::{Genre, Movie},
        services::movie_client::MockMovieClient,
    };
    use mockall::predicate::eq;

    fn service(movie_client: MockMovieClient) -> CustomerService {
        CustomerService::new(
            Arc::new(InMemoryCustomerRepository::seeded()),
            Arc::new(movie_client),
        )
    }

    #[tokio::test]
    async fn test_get_customer_uses_customer_genre() {
        let movies = vec![
            Movie::new(1, "movie-1", 1990, Genre::Action),
            Movie::new(2, "movie-2", 1991, Genre::Action),
        ];
        let returned = movies.clone();

        let mut movie_client = MockMovieClient::new();
        movie_client
            .expect_get_movies()
            .with(eq(Genre::Action))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let response = service(movie_client).get_customer(1).await.unwrap();

        assert_eq!(response.name, "sam");
        assert_eq!(response.favorite_genre, Genre::Action);
        assert_eq!(response.recommended_movies, movies);
    }

    #[tokio::test]
    async fn test_get_customer_not_found_skips_movie_service() {
        let mut movie_client = MockMovieClient::new();
        movie_client.expect_get_movies().times(0);

        let err = service(movie_client).get_customer(10).await.unwrap_err();
        assert!(matches!(err, AppError::CustomerNotFound(10)));
    }

    #[tokio::test]
    async fn test_movie_service_failure_propagates() {
        let mut movie_client = MockMovieClient::new();
        movie_client
            .expect_get_movies()
            .returning(|_| Err(AppError::MovieService("unavailable".to_string())));

        let err = service(movie_client).get_customer(2).await.unwrap_err();
        assert!(matches!(err, AppError::MovieService(_)));
    }

    #[tokio::test]
    async fn test_update_genre_then_lookup_uses_new_genre() {
        let mut movie_client = MockMovieClient::new();
        movie_client
            .expect_get_movies()
            .with(eq(Genre::Drama))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = service(movie_client);
        service
            .update_genre(1, GenreUpdateRequest { genre: Genre::Drama })
            .await
            .unwrap();

        let response = service.get_customer(1).await.unwrap();
        assert_eq!(response.favorite_genre, Genre::Drama);
        assert!(response.recommended_movies.is_empty());
    }

    #[tokio::test]
    async fn test_update_genre_unknown_customer() {
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_update_genre()
            .with(eq(42), eq(Genre::Thriller))
            .times(1)
            .returning(|_, _| Ok(false));

        let service = CustomerService::new(Arc::new(repository), Arc::new(MockMovieClient::new()));
        let err = service
            .update_genre(42, GenreUpdateRequest { genre: Genre::Thriller })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CustomerNotFound(42)));
    }
}
