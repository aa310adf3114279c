pub mod handlers;
pub mod routes;

pub use handlers::{create_rating_handler, get_ratings_handler};
pub use routes::create_http_routes;
