use std::{sync::Arc, time::Duration};

use serde_json::json;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    client::api::RatingsApi,
    models::InsertRating,
    validation::validate_rating_input,
};

/// How long the success overlay stays up before the flow reverts to Home.
pub const SUCCESS_DISMISS: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Features,
    Rules,
    Rating,
}

#[derive(Debug, Clone, Default)]
pub struct RatingForm {
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub message: String,
}

#[derive(Debug)]
struct FlowState {
    page: Page,
    show_success: bool,
    notice: Option<String>,
    in_flight: bool,
    form: RatingForm,
    // Pending auto-dismiss. Kept inside the state so scheduling and
    // cancellation are serialized with the page/overlay mutations.
    dismiss_task: Option<JoinHandle<()>>,
}

impl FlowState {
    fn cancel_dismiss(&mut self) {
        if let Some(task) = self.dismiss_task.take() {
            task.abort();
        }
    }
}

/// Page/form state machine for the rating site. Navigation clears the success
/// overlay; a successful submit shows it, resets the form and schedules a
/// dismiss back to Home after [`SUCCESS_DISMISS`]. The dismiss task is aborted
/// on navigation and on unmount, and its body is a no-op once the overlay is
/// gone, so it never fires against stale state.
pub struct FormFlow {
    api: RatingsApi,
    state: Arc<Mutex<FlowState>>,
}

impl FormFlow {
    pub fn new(api: RatingsApi) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(FlowState {
                page: Page::Home,
                show_success: false,
                notice: None,
                in_flight: false,
                form: RatingForm::default(),
                dismiss_task: None,
            })),
        }
    }

    pub async fn show_page(&self, page: Page) {
        let mut state = self.state.lock().await;
        state.cancel_dismiss();
        state.page = page;
        state.show_success = false;
        state.notice = None;
    }

    pub async fn set_form(&self, form: RatingForm) {
        let mut state = self.state.lock().await;
        state.form = form;
    }

    /// Submits the current form. Only does anything on the Rating page with no
    /// request already in flight. Validation failures and server failures both
    /// leave the page and overlay unchanged and set an inline notice.
    pub async fn submit(&self) {
        let payload = {
            let mut state = self.state.lock().await;
            if state.page != Page::Rating || state.in_flight {
                return;
            }

            match Self::validate_form(&state.form) {
                Ok(payload) => {
                    state.in_flight = true;
                    payload
                }
                Err(notice) => {
                    state.notice = Some(notice);
                    return;
                }
            }
        };

        let result = self.api.submit_rating(&payload).await;

        let mut state = self.state.lock().await;
        state.in_flight = false;

        match result {
            Ok(rating) => {
                tracing::info!("Rating submitted: {}", rating.id);
                state.show_success = true;
                state.notice = None;
                state.form = RatingForm::default();
                Self::schedule_dismiss(&mut state, Arc::clone(&self.state));
            }
            Err(err) => {
                tracing::warn!("Rating submission failed: {}", err);
                state.notice = Some("Something went wrong, please try again later".into());
            }
        }
    }

    /// Tears the flow down. Any pending dismiss must not fire afterwards.
    pub async fn unmount(&self) {
        let mut state = self.state.lock().await;
        state.cancel_dismiss();
    }

    pub async fn page(&self) -> Page {
        self.state.lock().await.page
    }

    pub async fn success_visible(&self) -> bool {
        self.state.lock().await.show_success
    }

    pub async fn notice(&self) -> Option<String> {
        self.state.lock().await.notice.clone()
    }

    pub async fn form(&self) -> RatingForm {
        self.state.lock().await.form.clone()
    }

    fn validate_form(form: &RatingForm) -> Result<InsertRating, String> {
        let input = json!({
            "name": form.name,
            "email": form.email,
            "rating": form.rating,
            "message": form.message,
        });

        validate_rating_input(&input).map_err(|details| {
            details
                .iter()
                .map(|v| format!("{} {}", v.field, v.message))
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    fn schedule_dismiss(state: &mut FlowState, shared: Arc<Mutex<FlowState>>) {
        state.cancel_dismiss();

        let task = tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_DISMISS).await;
            let mut state = shared.lock().await;
            // Navigation may have cleared the overlay after the sleep ended
            // but before this lock was acquired; a stale dismiss is a no-op.
            if state.show_success {
                state.show_success = false;
                state.page = Page::Home;
            }
        });

        state.dismiss_task = Some(task);
    }
}
