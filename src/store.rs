use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{InsertRating, Rating},
};

/// Storage contract for ratings. Payloads are already validated when they
/// reach the store; create stamps id and timestamp, list returns newest first.
#[async_trait]
pub trait RatingStore: Send + Sync {
    async fn create_rating(&self, payload: InsertRating) -> Result<Rating, AppError>;
    async fn get_ratings(&self) -> Result<Vec<Rating>, AppError>;
}

/// Process-local store. No durability: a restart discards all records.
pub struct MemStore {
    ratings: Mutex<HashMap<Uuid, Rating>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            ratings: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RatingStore for MemStore {
    async fn create_rating(&self, payload: InsertRating) -> Result<Rating, AppError> {
        let rating = Rating {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            rating: payload.rating,
            message: payload.message,
            created_at: Utc::now(),
        };

        let mut ratings = self.ratings.lock().await;
        ratings.insert(rating.id, rating.clone());

        Ok(rating)
    }

    async fn get_ratings(&self) -> Result<Vec<Rating>, AppError> {
        let ratings = self.ratings.lock().await;

        let mut all: Vec<Rating> = ratings.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(all)
    }
}
