//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ApiError, Movie, MovieDraft, MovieId, MovieService};

/// In-memory service. Assigns ids after the highest one it holds.
/// Built with `failing`, every call returns `ApiError::Status`.
pub struct StubService {
    movies: Mutex<Vec<Movie>>,
    fail_with: Option<u16>,
}

impl StubService {
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
            fail_with: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            movies: Mutex::new(Vec::new()),
            fail_with: Some(status),
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.fail_with {
            Some(status) => Err(ApiError::Status { status }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MovieService for StubService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.check()?;
        Ok(self.movies.lock().unwrap().clone())
    }

    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, ApiError> {
        self.check()?;
        let mut movies = self.movies.lock().unwrap();
        let next = movies.iter().map(|m| m.id.0).max().unwrap_or(0) + 1;
        let movie = draft.clone().into_movie(MovieId(next));
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update_movie(&self, movie: &Movie) -> Result<(), ApiError> {
        self.check()?;
        let mut movies = self.movies.lock().unwrap();
        match movies.iter_mut().find(|m| m.id == movie.id) {
            Some(existing) => {
                *existing = movie.clone();
                Ok(())
            }
            None => Err(ApiError::Status { status: 404 }),
        }
    }

    async fn delete_movie(&self, id: MovieId) -> Result<(), ApiError> {
        self.check()?;
        let mut movies = self.movies.lock().unwrap();
        let before = movies.len();
        movies.retain(|m| m.id != id);
        if movies.len() == before {
            return Err(ApiError::Status { status: 404 });
        }
        Ok(())
    }

    async fn delete_all_movies(&self) -> Result<(), ApiError> {
        self.check()?;
        self.movies.lock().unwrap().clear();
        Ok(())
    }
}

/// A bare record with only title and year set.
pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id: MovieId(id),
        title: title.to_string(),
        year: 2000,
        director: None,
        description: None,
        actors: None,
    }
}

/// Creates a test App backed by an empty StubService.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubService::with_movies(Vec::new())))
}
