use async_trait::async_trait;
use thiserror::Error;

use super::types::{Movie, MovieDraft, MovieId};

/// Errors that can occur while talking to the movie collection.
///
/// The UI collapses every variant into a single "operation failed" message;
/// the variants exist for logging and tests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection refused, reset).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-2xx status. The body is not inspected.
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
    /// A 2xx response whose body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// The remote movie collection.
///
/// Every call is a single attempt: no retries, no timeout.
#[async_trait]
pub trait MovieService: Send + Sync {
    /// Returns the name of the backend, for logs.
    fn name(&self) -> &str;

    /// `GET /movies`
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError>;

    /// `POST /movies`. Returns the created record with its assigned id.
    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, ApiError>;

    /// `PUT /movies/{id}`, replacing the whole record.
    async fn update_movie(&self, movie: &Movie) -> Result<(), ApiError>;

    /// `DELETE /movies/{id}`
    async fn delete_movie(&self, id: MovieId) -> Result<(), ApiError>;

    /// `DELETE /movies`, emptying the collection.
    async fn delete_all_movies(&self) -> Result<(), ApiError>;
}
