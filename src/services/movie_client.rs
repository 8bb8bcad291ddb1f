//! Movie service collaborator
//!
//! Recommendations come from an external movie service. The trait keeps that
//! boundary substitutable; `HttpMovieClient` is the production implementation.
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{Genre, Movie},
};

/// Source of movie recommendations for a genre
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieClient: Send + Sync {
    /// Fetches movies of the given genre, in the order the service returns them
    async fn get_movies(&self, genre: Genre) -> AppResult<Vec<Movie>>;
}

/// Movie client calling `GET {base_url}/api/movies/{GENRE}`
#[derive(Clone)]
pub struct HttpMovieClient {
    http_client: HttpClient,
    base_url: String,
}

impl HttpMovieClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn movies_url(&self, genre: Genre) -> String {
        format!("{}/api/movies/{}", self.base_url, genre)
    }
}

#[async_trait::async_trait]
impl MovieClient for HttpMovieClient {
    #[instrument(skip_all, fields(genre = %genre))]
    async fn get_movies(&self, genre: Genre) -> AppResult<Vec<Movie>> {
        let response = self.http_client.get(self.movies_url(genre)).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::MovieService(format!(
                "Movie service returned status {}: {}",
                status, body
            )));
        }

        let movies: Vec<Movie> = response.json().await.map_err(|e| {
            AppError::MovieService(format!("Failed to parse movie service response: {}", e))
        })?;

        tracing::info!(movies = movies.len(), "Movies fetched");

        Ok(movies)
    }
}
