pub mod api;
pub mod flow;

pub use api::{ClientError, RatingsApi};
pub use flow::{FormFlow, Page, RatingForm, SUCCESS_DISMISS};
