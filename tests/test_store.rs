use std::time::Duration;

use venice_community_be::{
    models::InsertRating,
    store::{MemStore, RatingStore},
};

fn payload(rating: i16) -> InsertRating {
    InsertRating {
        name: "Ali".into(),
        email: "ali@example.com".into(),
        rating,
        message: "Great".into(),
    }
}

#[tokio::test]
async fn test_create_returns_stored_record() {
    let store = MemStore::new();

    let rating = store.create_rating(payload(4)).await.unwrap();
    assert_eq!(rating.name, "Ali");
    assert_eq!(rating.rating, 4);

    let all = store.get_ratings().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, rating.id);
    assert_eq!(all[0].created_at, rating.created_at);
}

#[tokio::test]
async fn test_ids_unique_and_timestamps_non_decreasing() {
    let store = MemStore::new();

    let mut ids = Vec::new();
    let mut previous = None;
    for _ in 0..20 {
        let rating = store.create_rating(payload(3)).await.unwrap();
        assert!(!ids.contains(&rating.id), "duplicate id generated");
        if let Some(previous) = previous {
            assert!(rating.created_at >= previous);
        }
        previous = Some(rating.created_at);
        ids.push(rating.id);
    }
}

#[tokio::test]
async fn test_get_ratings_empty() {
    let store = MemStore::new();
    assert!(store.get_ratings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_ratings_newest_first() {
    let store = MemStore::new();

    for rating in 1..=5 {
        store.create_rating(payload(rating)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let all = store.get_ratings().await.unwrap();
    assert_eq!(all.len(), 5);
    // Last created carries the highest star count, so descending time means
    // descending rating here.
    for pair in all.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
        assert!(pair[0].rating > pair[1].rating);
    }
}

#[tokio::test]
async fn test_get_ratings_idempotent() {
    let store = MemStore::new();
    store.create_rating(payload(2)).await.unwrap();
    store.create_rating(payload(5)).await.unwrap();

    let first: Vec<_> = store
        .get_ratings()
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    let second: Vec<_> = store
        .get_ratings()
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
