use axum::{Router, routing::post};

use crate::{
    http::handlers::{create_rating_handler, get_ratings_handler},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/ratings",
            post(create_rating_handler).get(get_ratings_handler),
        )
        .with_state(state)
}
