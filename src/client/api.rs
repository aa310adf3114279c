use reqwest::StatusCode;
use thiserror::Error;

use crate::models::{InsertRating, Rating};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rating rejected by server")]
    Rejected,

    #[error("server error: {0}")]
    Server(StatusCode),
}

/// Typed client for the ratings resource.
#[derive(Clone)]
pub struct RatingsApi {
    http: reqwest::Client,
    base_url: String,
}

impl RatingsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn submit_rating(&self, payload: &InsertRating) -> Result<Rating, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/ratings", self.base_url))
            .json(payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::BAD_REQUEST => Err(ClientError::Rejected),
            status => Err(ClientError::Server(status)),
        }
    }

    pub async fn fetch_ratings(&self) -> Result<Vec<Rating>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/ratings", self.base_url))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(ClientError::Server(status)),
        }
    }
}
