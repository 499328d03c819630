//! Books repository for database operations.

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, SearchField, ITEMS_PER_PAGE},
};

/// Escape LIKE metacharacters so the search term always matches literally.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Search books with pagination.
    ///
    /// Returns the window `[(page-1)*10, page*10)` of the filtered list
    /// ordered by creation time (oldest first), together with the total
    /// match count across all pages.
    pub async fn search(
        &self,
        page: i64,
        term: &str,
        field: SearchField,
    ) -> AppResult<(Vec<Book>, i64)> {
        let offset = (page - 1) * ITEMS_PER_PAGE;
        let pattern = format!("%{}%", escape_like(term));
        // Column name comes from the SearchField enum, never from caller input.
        let column = field.column();

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM books WHERE {} ILIKE $1",
            column
        ))
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let books = sqlx::query_as::<_, Book>(&format!(
            r#"
            SELECT id, title, author, price, details, created_at
            FROM books
            WHERE {} ILIKE $1
            ORDER BY created_at, id
            LIMIT $2 OFFSET $3
            "#,
            column
        ))
        .bind(&pattern)
        .bind(ITEMS_PER_PAGE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Get a book by id
    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, price, details, created_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    /// Insert a new book, assigning its id and, when absent, its creation time
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let id = Uuid::new_v4();
        let created_at = book.created_at.unwrap_or_else(Utc::now);

        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author, price, details, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, author, price, details, created_at
            "#,
        )
        .bind(id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.price)
        .bind(&book.details)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Delete a book by id. Deleting an id that does not exist is a no-op.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_terms_alone() {
        assert_eq!(escape_like("dune"), "dune");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn escape_like_escapes_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
