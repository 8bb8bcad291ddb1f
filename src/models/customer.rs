use serde::{Deserialize, Serialize};

use super::{Genre, Movie};

/// A stored customer record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    /// Exactly one preference at any time; updates replace it
    pub favorite_genre: Genre,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>, favorite_genre: Genre) -> Self {
        Self {
            id,
            name: name.into(),
            favorite_genre,
        }
    }
}

/// Customer profile enriched with live movie recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub favorite_genre: Genre,
    /// Same order and count as returned by the movie service
    pub recommended_movies: Vec<Movie>,
}

impl CustomerResponse {
    pub fn new(customer: Customer, recommended_movies: Vec<Movie>) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            favorite_genre: customer.favorite_genre,
            recommended_movies,
        }
    }
}

/// Body of `PATCH /api/customers/{id}/genre`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreUpdateRequest {
    pub genre: Genre,
}
