use std::sync::Arc;

use crate::store::RatingStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RatingStore>,
}
