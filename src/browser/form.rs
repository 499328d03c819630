//! Registration form state for the catalog browser.

use rust_decimal::Decimal;

use crate::models::book::CreateBook;

use super::ClientError;

/// Ticks the success notice stays visible after a registration.
pub const SUCCESS_NOTICE_TICKS: u8 = 3;

/// Book registration form.
///
/// Input is validated locally before anything is sent; the surrounding view
/// feeds the submission result back in and refreshes the list on success.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub title: String,
    pub author: String,
    /// Raw price input; empty means no price
    pub price: String,
    pub details: String,
    submitting: bool,
    error: Option<String>,
    success_ticks: u8,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current input and build the create request.
    pub fn build_request(&self) -> Result<CreateBook, String> {
        let title = self.title.trim();
        let author = self.author.trim();
        if title.is_empty() || author.is_empty() {
            return Err("Title and author are required".to_string());
        }

        let price = match self.price.trim() {
            "" => None,
            raw => Some(
                raw.parse::<Decimal>()
                    .map_err(|_| "Price must be a number".to_string())?,
            ),
        };

        let details = Some(self.details.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(CreateBook {
            title: title.to_string(),
            author: author.to_string(),
            price,
            details,
            created_at: None,
        })
    }

    /// Begin a submission. Invalid input surfaces the error and sends nothing.
    pub fn begin_submit(&mut self) -> Option<CreateBook> {
        match self.build_request() {
            Ok(request) => {
                self.submitting = true;
                self.error = None;
                Some(request)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// The server accepted the book: clear the form and show the success notice.
    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.title.clear();
        self.author.clear();
        self.price.clear();
        self.details.clear();
        self.error = None;
        self.success_ticks = SUCCESS_NOTICE_TICKS;
    }

    /// The submission failed; surface the server message or a generic fallback.
    pub fn submit_failed(&mut self, error: &ClientError) {
        self.submitting = false;
        self.error = Some(match error {
            ClientError::Rejected(message) => message.clone(),
            _ => "Could not register the book".to_string(),
        });
    }

    /// Advance the notice timer one tick; the success notice clears itself.
    pub fn tick(&mut self) {
        self.success_ticks = self.success_ticks.saturating_sub(1);
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_visible(&self) -> bool {
        self.success_ticks > 0
    }
}
