//! Catalog browser: client-side state for the book list UI.
//!
//! The browser holds paging/search/form state in explicit objects and talks
//! to the server through the [`CatalogApi`] trait. Fetches are issued as
//! values and their results fed back in, so the state machines never block
//! and a superseded fetch can be recognized by its sequence number and
//! discarded.

pub mod client;
pub mod detail;
pub mod form;
pub mod list;

pub use client::HttpCatalogClient;
pub use detail::{DetailPhase, DetailView, Navigation};
pub use form::RegistrationForm;
pub use list::{BrowserConfig, CatalogBrowser, FetchRequest, ListPhase};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use crate::models::book::{Book, BookList, CreateBook, SearchField};

/// Failures surfaced by the catalog API collaborator.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the request and said why
    #[error("{0}")]
    Rejected(String),

    #[error("book not found")]
    NotFound,

    /// Network failure or a server-side error
    #[error("request failed: {0}")]
    Transport(String),
}

/// The record-CRUD collaborator the browser drives.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_books(
        &self,
        page: i64,
        search_term: &str,
        search_field: SearchField,
    ) -> Result<BookList, ClientError>;

    async fn get_book(&self, id: Uuid) -> Result<Book, ClientError>;

    async fn create_book(&self, book: &CreateBook) -> Result<Book, ClientError>;

    async fn delete_book(&self, id: Uuid) -> Result<(), ClientError>;
}
