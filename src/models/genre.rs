use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Movie genre, used both as a customer's preference and a movie's classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Comedy,
    Crime,
    Drama,
    SciFi,
    Thriller,
}

impl Genre {
    /// Wire representation, shared by JSON, the database column and the movie service path
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::Comedy => "COMEDY",
            Genre::Crime => "CRIME",
            Genre::Drama => "DRAMA",
            Genre::SciFi => "SCI_FI",
            Genre::Thriller => "THRILLER",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown genre: {0}")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTION" => Ok(Genre::Action),
            "COMEDY" => Ok(Genre::Comedy),
            "CRIME" => Ok(Genre::Crime),
            "DRAMA" => Ok(Genre::Drama),
            "SCI_FI" => Ok(Genre::SciFi),
            "THRILLER" => Ok(Genre::Thriller),
            other => Err(UnknownGenre(other.to_string())),
        }
    }
}
