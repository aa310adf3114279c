pub mod rating;

pub use rating::{InsertRating, Rating};
