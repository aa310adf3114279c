use std::{sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use venice_community_be::{
    http::{create_rating_handler, get_ratings_handler},
    state::AppState,
    store::MemStore,
};

fn test_state() -> AppState {
    AppState {
        store: Arc::new(MemStore::new()),
    }
}

#[tokio::test]
async fn test_create_rating_success() {
    let state = test_state();

    let body = json!({
        "name": "Ali",
        "email": "ali@example.com",
        "rating": 5,
        "message": "Great"
    });

    let Json(rating) = create_rating_handler(State(state), Json(body))
        .await
        .expect("valid submission should succeed");

    assert_eq!(rating.rating, 5);
    assert_eq!(rating.name, "Ali");

    let wire = serde_json::to_value(&rating).unwrap();
    assert!(wire.get("id").is_some());
    assert!(wire.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_rating_validation_failure() {
    let state = test_state();

    let body = json!({
        "name": "",
        "email": "bad",
        "rating": 7,
        "message": ""
    });

    let (status, Json(error)) = create_rating_handler(State(state.clone()), Json(body))
        .await
        .expect_err("invalid submission should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "Invalid data");
    assert!(error.details.expect("details should be present").len() >= 4);

    // Nothing reached the store.
    let Json(ratings) = get_ratings_handler(State(state)).await.unwrap();
    assert!(ratings.is_empty());
}

#[tokio::test]
async fn test_create_rating_missing_field() {
    let state = test_state();

    let body = json!({
        "email": "ali@example.com",
        "rating": 3,
        "message": "Fine"
    });

    let (status, Json(error)) = create_rating_handler(State(state), Json(body))
        .await
        .expect_err("missing name should be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = error.details.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].field, "name");
}

#[tokio::test]
async fn test_get_ratings_newest_first() {
    let state = test_state();

    for (rating, name) in [(2, "Sara"), (5, "Ali")] {
        let body = json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "rating": rating,
            "message": "Great"
        });
        create_rating_handler(State(state.clone()), Json(body))
            .await
            .expect("submission should succeed");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let Json(ratings) = get_ratings_handler(State(state)).await.unwrap();
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0].rating, 5);
    assert_eq!(ratings[0].name, "Ali");
    assert!(ratings[0].created_at >= ratings[1].created_at);
}
