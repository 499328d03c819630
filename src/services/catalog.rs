//! Catalog management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookList, BookQuery, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books matching the query: one page window plus the total match count
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<BookList> {
        let (books, total_count) = self
            .repository
            .books
            .search(query.page(), query.search_term(), query.search_field())
            .await?;

        Ok(BookList { books, total_count })
    }

    /// Get a book by id
    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Create a book. Title and author must be non-empty after trimming.
    pub async fn create_book(&self, mut book: CreateBook) -> AppResult<Book> {
        book.title = book.title.trim().to_string();
        book.author = book.author.trim().to_string();
        book.details = book.details.filter(|d| !d.trim().is_empty());

        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Catalog create: book id={} title={:?}", created.id, created.title);
        Ok(created)
    }

    /// Delete a book by id. Unknown ids succeed; delete is idempotent.
    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
