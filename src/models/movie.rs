use serde::{Deserialize, Serialize};

use super::Genre;

/// A movie as returned by the movie service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    /// A genre outside `Genre` fails deserialization of the whole movie list
    pub genre: Genre,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>, year: i32, genre: Genre) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            genre,
        }
    }
}
