use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned movie identifier. Opaque to the client.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted movie record as exchanged with the collection endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actors: Option<String>,
}

impl Movie {
    /// Optional text fields with empty strings treated as unset.
    pub fn director(&self) -> Option<&str> {
        present(&self.director)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn actors(&self) -> Option<&str> {
        present(&self.actors)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A movie the server hasn't seen yet: no `id`.
///
/// Empty optional fields are left out of the request body, so a draft with
/// only a title and year serializes to exactly `{"title": .., "year": ..}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
}

impl MovieDraft {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
            director: None,
            description: None,
            actors: None,
        }
    }

    /// Merges an existing record's id into this draft, producing the full
    /// replacement sent on edit.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            description: self.description,
            actors: self.actors,
        }
    }
}

/// Body returned by `POST /movies`. Only `movie` is used.
#[derive(Deserialize, Debug)]
pub struct CreatedMovie {
    pub movie: Movie,
}
