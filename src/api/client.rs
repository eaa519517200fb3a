//! HTTP implementation of [`MovieService`] on top of reqwest.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Response;

use super::service::{ApiError, MovieService};
use super::types::{CreatedMovie, Movie, MovieDraft, MovieId};

/// Talks JSON to a REST server exposing `/movies`.
pub struct HttpMovieService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMovieService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/movies", self.base_url)
    }

    fn record_url(&self, id: MovieId) -> String {
        format!("{}/movies/{}", self.base_url, id)
    }
}

/// Turns any non-2xx status into `ApiError::Status`.
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!("Request to {} failed with {}", response.url(), status);
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        debug!("Undecodable body: {}", body);
        ApiError::Decode(e.to_string())
    })
}

#[async_trait]
impl MovieService for HttpMovieService {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let url = self.collection_url();
        info!("GET {}", url);
        let response = check_status(self.client.get(&url).send().await?)?;
        let movies: Vec<Movie> = decode(response).await?;
        debug!("Fetched {} movies", movies.len());
        Ok(movies)
    }

    async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, ApiError> {
        let url = self.collection_url();
        info!("POST {}", url);
        debug!("Draft: {:?}", draft);
        let response = check_status(self.client.post(&url).json(draft).send().await?)?;
        let created: CreatedMovie = decode(response).await?;
        debug!("Created movie with id {}", created.movie.id);
        Ok(created.movie)
    }

    async fn update_movie(&self, movie: &Movie) -> Result<(), ApiError> {
        let url = self.record_url(movie.id);
        info!("PUT {}", url);
        debug!("Replacement: {:?}", movie);
        check_status(self.client.put(&url).json(movie).send().await?)?;
        Ok(())
    }

    async fn delete_movie(&self, id: MovieId) -> Result<(), ApiError> {
        let url = self.record_url(id);
        info!("DELETE {}", url);
        check_status(self.client.delete(&url).send().await?)?;
        Ok(())
    }

    async fn delete_all_movies(&self) -> Result<(), ApiError> {
        let url = self.collection_url();
        info!("DELETE {}", url);
        check_status(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}
