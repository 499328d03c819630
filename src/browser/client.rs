//! HTTP implementation of the catalog API.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::book::{Book, BookList, CreateBook, SearchField};

use super::{CatalogApi, ClientError};

/// Error body returned by the server
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Created-book response body
#[derive(Deserialize)]
struct CreatedBody {
    book: Book,
}

/// reqwest-backed catalog client.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// `base_url` points at the API root, e.g. `http://localhost:8080/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn rejection(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("request failed with status {}", status));

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound,
            s if s.is_client_error() => ClientError::Rejected(message),
            _ => ClientError::Transport(message),
        }
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_books(
        &self,
        page: i64,
        search_term: &str,
        search_field: SearchField,
    ) -> Result<BookList, ClientError> {
        let response = self
            .http
            .get(self.url("/books"))
            .query(&[
                ("page", page.to_string()),
                ("searchTerm", search_term.to_string()),
                ("searchOption", search_field.to_string()),
            ])
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response.json().await.map_err(transport)
    }

    async fn get_book(&self, id: Uuid) -> Result<Book, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/books/{}", id)))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response.json().await.map_err(transport)
    }

    async fn create_book(&self, book: &CreateBook) -> Result<Book, ClientError> {
        let response = self
            .http
            .post(self.url("/books"))
            .json(book)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: CreatedBody = response.json().await.map_err(transport)?;
        Ok(body.book)
    }

    async fn delete_book(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/books/{}", id)))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(())
    }
}
