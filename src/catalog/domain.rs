pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, CreateBookDto, UpdateBookDto};
use crate::core::bookstore::BookstoreResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_all(&self) -> BookstoreResult<Vec<BookDto>>;
    async fn get_by_isbn(&self, isbn: &str) -> BookstoreResult<Option<BookDto>>;
    async fn create(&self, book: &CreateBookDto) -> BookstoreResult<BookDto>;
    async fn update(&self, isbn: &str, book: &UpdateBookDto) -> BookstoreResult<Option<BookDto>>;
    async fn delete(&self, isbn: &str) -> BookstoreResult<bool>;
    async fn generate_report(&self) -> BookstoreResult<String>;
}
