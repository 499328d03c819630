//! Detail/delete view state for the catalog browser.

use uuid::Uuid;

use crate::models::book::Book;

use super::ClientError;

/// What the detail pane is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Loading,
    Loaded(Book),
    NotFound,
    Failed(String),
}

/// Where the surrounding shell should navigate next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    BackToList,
}

/// Detail view for one book, including the confirm-then-delete flow.
#[derive(Debug)]
pub struct DetailView {
    id: Uuid,
    phase: DetailPhase,
    confirming_delete: bool,
    deleting: bool,
    alert: Option<String>,
}

impl DetailView {
    /// Open the view for a book; the caller issues the detail fetch.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            phase: DetailPhase::Loading,
            confirming_delete: false,
            deleting: false,
            alert: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Feed the detail fetch result back in.
    pub fn loaded(&mut self, outcome: Result<Book, ClientError>) {
        self.phase = match outcome {
            Ok(book) => DetailPhase::Loaded(book),
            Err(ClientError::NotFound) => DetailPhase::NotFound,
            Err(e) => DetailPhase::Failed(e.to_string()),
        };
    }

    /// First delete click: ask for confirmation, nothing is sent yet.
    pub fn request_delete(&mut self) {
        if matches!(self.phase, DetailPhase::Loaded(_)) && !self.deleting {
            self.confirming_delete = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Confirmed: returns the id the caller should issue the delete for.
    pub fn confirm_delete(&mut self) -> Option<Uuid> {
        if !self.confirming_delete {
            return None;
        }
        self.confirming_delete = false;
        self.deleting = true;
        Some(self.id)
    }

    /// Feed the delete result back in. Success navigates back to the list;
    /// failure surfaces an alert and leaves the view as it was.
    pub fn delete_done(&mut self, outcome: Result<(), ClientError>) -> Option<Navigation> {
        self.deleting = false;
        match outcome {
            Ok(()) => Some(Navigation::BackToList),
            Err(e) => {
                self.alert = Some(e.to_string());
                None
            }
        }
    }
}
