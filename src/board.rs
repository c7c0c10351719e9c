//! The board's three operations, written against two seams: the backend
//! (`ActivityApi`) and the page (`BoardHost`). Nothing here errors out to the
//! caller; every failure ends up as UI state plus a console line.

use crate::api::ActivityApi;
use crate::error::ApiError;
use crate::render::{confirm_prompt, ListView};
use crate::status::StatusMessage;

pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_INCOMPLETE: &str = "Please enter an email and choose an activity.";
pub const UNREGISTER_REJECTED_FALLBACK: &str = "Failed to unregister";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// Everything the board needs from the page it is drawn on.
pub trait BoardHost {
    /// Replace the whole list area.
    fn render_list(&self, view: ListView);

    /// Replace the activity selector's options.
    fn set_options(&self, names: Vec<String>);

    fn show_status(&self, message: StatusMessage);

    /// Clear the signup form's fields.
    fn reset_form(&self);

    /// Yes/no prompt. `false` means the user declined.
    fn confirm(&self, prompt: &str) -> bool;

    fn log_error(&self, line: &str);
}

pub struct ActivityBoard<A, H> {
    api: A,
    host: H,
}

impl<A: ActivityApi, H: BoardHost> ActivityBoard<A, H> {
    pub fn new(api: A, host: H) -> Self {
        Self { api, host }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Fetches the catalog and redraws the list and the selector from scratch.
    /// On failure the selector keeps whatever options it had.
    pub async fn load_activities(&self) {
        match self.api.list_activities().await {
            Ok(catalog) => {
                self.host.render_list(ListView::from_catalog(&catalog));
                self.host.set_options(catalog.names());
            }
            Err(e) => {
                self.host.render_list(ListView::Failed);
                self.host.log_error(&format!("Error fetching activities: {e}"));
            }
        }
    }

    pub async fn submit_signup(&self, email: &str, activity: &str) {
        let email = email.trim();
        if email.is_empty() || activity.is_empty() {
            self.host.show_status(StatusMessage::error(SIGNUP_INCOMPLETE));
            return;
        }

        match self.api.signup(activity, email).await {
            Ok(reply) => {
                let text = reply
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Signed up {email} for {activity}"));
                self.host.show_status(StatusMessage::success(text));
                self.host.reset_form();
                self.load_activities().await;
            }
            Err(ApiError::Rejected { reply, .. }) => {
                let text = reply
                    .detail()
                    .unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                self.host.show_status(StatusMessage::error(text));
            }
            Err(e) => {
                self.host.log_error(&format!("Error signing up: {e}"));
                self.host.show_status(StatusMessage::error(SIGNUP_FAILED));
            }
        }
    }

    /// Entry point of a participant's remove control.
    pub async fn unregister_participant(&self, email: &str, activity: &str) {
        if email.is_empty() || activity.is_empty() {
            return;
        }
        if !self.host.confirm(&confirm_prompt(email, activity)) {
            return;
        }

        match self.api.unregister(activity, email).await {
            Ok(_) => self.load_activities().await,
            Err(ApiError::Rejected { reply, .. }) => {
                let text = reply
                    .detail()
                    .or_else(|| reply.message().map(str::to_string))
                    .unwrap_or_else(|| UNREGISTER_REJECTED_FALLBACK.to_string());
                self.host.show_status(StatusMessage::error(text));
            }
            Err(e) => {
                self.host.log_error(&format!("Error unregistering participant: {e}"));
                self.host.show_status(StatusMessage::error(UNREGISTER_FAILED));
            }
        }
    }
}
