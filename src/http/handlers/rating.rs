use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use crate::{
    errors::{AppError, ErrorBody},
    models::Rating,
    state::AppState,
    validation::validate_rating_input,
};

pub async fn create_rating_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Rating>, (StatusCode, Json<ErrorBody>)> {
    let insert = match validate_rating_input(&payload) {
        Ok(insert) => insert,
        Err(details) => {
            tracing::warn!("Rejected rating submission: {} violation(s)", details.len());
            return Err(AppError::Validation(details).to_response());
        }
    };

    match state.store.create_rating(insert).await {
        Ok(rating) => {
            tracing::info!("Rating created: {}", rating.id);
            Ok(Json(rating))
        }
        Err(err) => {
            tracing::error!("Error creating rating: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_ratings_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Rating>>, (StatusCode, Json<ErrorBody>)> {
    let ratings = state.store.get_ratings().await.map_err(|e| {
        tracing::error!("Error listing ratings: {}", e);
        e.to_response()
    })?;

    Ok(Json(ratings))
}
