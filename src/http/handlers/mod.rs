pub mod rating;

pub use rating::{create_rating_handler, get_ratings_handler};
