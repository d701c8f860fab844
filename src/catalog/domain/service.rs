use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, CreateBookDto, UpdateBookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::report::render_report;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::domain::Configuration;

// CatalogServiceImpl runs every operation as one load, mutate, save cycle over the
// whole catalog document. The cycles are serialized by a single writer lock so that
// concurrent requests within this process cannot lose each other's updates.
pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    lock: Mutex<()>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_all(&self) -> BookstoreResult<Vec<BookDto>> {
        let _guard = self.lock.lock().await;
        let bookstore = self.book_repository.load().await?;
        Ok(bookstore.books.iter().map(BookDto::from).collect())
    }

    async fn get_by_isbn(&self, isbn: &str) -> BookstoreResult<Option<BookDto>> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Ok(None);
        }
        let _guard = self.lock.lock().await;
        let bookstore = self.book_repository.load().await?;
        Ok(bookstore.find(isbn).map(BookDto::from))
    }

    async fn create(&self, book: &CreateBookDto) -> BookstoreResult<BookDto> {
        let entity = BookEntity::from(book);
        if entity.isbn.is_empty() || entity.title.value.is_empty() {
            return Err(BookstoreError::validation("ISBN and Title are required"));
        }
        let _guard = self.lock.lock().await;
        let mut bookstore = self.book_repository.load().await?;
        if bookstore.contains(entity.isbn.as_str()) {
            warn!("book {} already exists in {}", entity.isbn, self.book_repository.location());
            return Err(BookstoreError::duplicate_key(
                format!("Book with ISBN {} already exists", entity.isbn).as_str()));
        }
        let view = BookDto::from(&entity);
        bookstore.books.push(entity);
        self.book_repository.save(&bookstore).await?;
        info!("added book {} to {} catalog", view.isbn, self.branch_id);
        Ok(view)
    }

    async fn update(&self, isbn: &str, book: &UpdateBookDto) -> BookstoreResult<Option<BookDto>> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Ok(None);
        }
        if book.title.trim().is_empty() {
            return Err(BookstoreError::validation("Title is required"));
        }
        let _guard = self.lock.lock().await;
        let mut bookstore = self.book_repository.load().await?;
        let view = match bookstore.find_mut(isbn) {
            Some(existing) => {
                book.apply_to(existing);
                BookDto::from(&*existing)
            }
            None => {
                debug!("book {} not found for update", isbn);
                return Ok(None);
            }
        };
        self.book_repository.save(&bookstore).await?;
        info!("updated book {} in {} catalog", isbn, self.branch_id);
        Ok(Some(view))
    }

    async fn delete(&self, isbn: &str) -> BookstoreResult<bool> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Ok(false);
        }
        let _guard = self.lock.lock().await;
        let mut bookstore = self.book_repository.load().await?;
        if bookstore.remove(isbn).is_none() {
            debug!("book {} not found for delete", isbn);
            return Ok(false);
        }
        self.book_repository.save(&bookstore).await?;
        info!("removed book {} from {} catalog", isbn, self.branch_id);
        Ok(true)
    }

    async fn generate_report(&self) -> BookstoreResult<String> {
        let books = self.list_all().await?;
        Ok(render_report(&books))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use rust_decimal::Decimal;
    use tempfile::TempDir;
    use crate::books::dto::{CreateBookDto, UpdateBookDto};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::bookstore::BookstoreError;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn build_service(dir: &TempDir) -> Box<dyn CatalogService> {
        let config = Configuration::new("test", dir.path().join("books.xml"));
        factory::create_catalog_service(&config, RepositoryStore::XmlFile)
    }

    fn dune() -> CreateBookDto {
        let mut book = CreateBookDto::new("1234567890", "Dune");
        book.year = 1965;
        book.price = Decimal::new(999, 2);
        book
    }

    #[tokio::test]
    async fn test_should_create_and_get_book() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let _ = catalog_svc.create(&dune()).await.expect("should add book");

        let loaded = catalog_svc.get_by_isbn("1234567890").await.expect("should load").expect("should find book");
        assert_eq!("Dune", loaded.title.as_str());
        assert_eq!("en", loaded.language.as_str());
        assert!(loaded.authors.is_empty());
        assert_eq!(1965, loaded.year);
        assert_eq!(Decimal::new(999, 2), loaded.price);
    }

    #[tokio::test]
    async fn test_should_reject_missing_isbn_or_title() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let res = catalog_svc.create(&CreateBookDto::new("", "Dune")).await;
        assert!(matches!(res, Err(BookstoreError::Validation { .. })));
        let res = catalog_svc.create(&CreateBookDto::new("1234567890", "")).await;
        assert!(matches!(res, Err(BookstoreError::Validation { .. })));
        assert!(catalog_svc.list_all().await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let _ = catalog_svc.create(&dune()).await.expect("should add book");
        let mut other = CreateBookDto::new("1234567890", "Something else");
        other.category = "other".to_string();
        let res = catalog_svc.create(&other).await;
        assert!(matches!(res, Err(BookstoreError::DuplicateKey { .. })));
        assert_eq!(1, catalog_svc.list_all().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_list_in_insertion_order() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        for isbn in ["3333333333", "1111111111", "2222222222"] {
            let _ = catalog_svc.create(&CreateBookDto::new(isbn, "title")).await.expect("should add book");
        }
        let isbns: Vec<String> = catalog_svc.list_all().await.expect("should list")
            .into_iter().map(|b| b.isbn).collect();
        assert_eq!(vec!["3333333333", "1111111111", "2222222222"], isbns);
    }

    #[tokio::test]
    async fn test_should_get_same_book_twice() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let _ = catalog_svc.create(&dune()).await.expect("should add book");
        let first = catalog_svc.get_by_isbn("1234567890").await.expect("should load");
        let second = catalog_svc.get_by_isbn("1234567890").await.expect("should load");
        assert_eq!(first, second);
        assert!(catalog_svc.get_by_isbn("").await.expect("should load").is_none());
    }

    #[tokio::test]
    async fn test_should_match_isbn_case_sensitive() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let _ = catalog_svc.create(&CreateBookDto::new("123456789X", "title")).await.expect("should add book");
        assert!(catalog_svc.get_by_isbn("123456789X").await.expect("should load").is_some());
        assert!(catalog_svc.get_by_isbn("123456789x").await.expect("should load").is_none());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let _ = catalog_svc.create(&dune()).await.expect("should add book");
        let mut update = UpdateBookDto::new("Dune Messiah");
        update.language = "fr".to_string();
        update.authors = vec!["Frank Herbert".to_string(), "Brian Herbert".to_string()];
        update.category = "sci-fi".to_string();
        update.year = 1969;
        update.price = Decimal::new(1250, 2);

        let updated = catalog_svc.update("1234567890", &update).await.expect("should update").expect("should find book");
        assert_eq!("1234567890", updated.isbn.as_str());

        let loaded = catalog_svc.get_by_isbn("1234567890").await.expect("should load").expect("should find book");
        assert_eq!(updated, loaded);
        assert_eq!("Dune Messiah", loaded.title.as_str());
        assert_eq!("fr", loaded.language.as_str());
        assert_eq!(update.authors, loaded.authors);
        assert_eq!("sci-fi", loaded.category.as_str());
        assert_eq!(1969, loaded.year);
        assert_eq!(Decimal::new(1250, 2), loaded.price);
    }

    #[tokio::test]
    async fn test_should_keep_identity_of_padded_isbn() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let mut book = CreateBookDto::new("1234567890 ", "  Dune  ");
        book.authors = vec!["  Frank Herbert ".to_string(), "   ".to_string()];
        let created = catalog_svc.create(&book).await.expect("should add book");
        assert_eq!("1234567890", created.isbn.as_str());
        assert_eq!("Dune", created.title.as_str());

        let loaded = catalog_svc.get_by_isbn("1234567890 ").await.expect("should load").expect("should find book");
        assert_eq!(created, loaded);
        assert_eq!(vec![created], catalog_svc.list_all().await.expect("should list"));
        let res = catalog_svc.create(&CreateBookDto::new(" 1234567890", "Dune")).await;
        assert!(matches!(res, Err(BookstoreError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_blank_title() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let res = catalog_svc.create(&CreateBookDto::new("1234567890", "   ")).await;
        assert!(matches!(res, Err(BookstoreError::Validation { .. })));
        let _ = catalog_svc.create(&dune()).await.expect("should add book");
        let res = catalog_svc.update("1234567890", &UpdateBookDto::new("  ")).await;
        assert!(matches!(res, Err(BookstoreError::Validation { .. })));
        let loaded = catalog_svc.get_by_isbn("1234567890").await.expect("should load").expect("should find book");
        assert_eq!("Dune", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let res = catalog_svc.update("1234567890", &UpdateBookDto::new("Dune")).await.expect("should update");
        assert!(res.is_none());
        assert!(!dir.path().join("books.xml").exists());
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let _ = catalog_svc.create(&dune()).await.expect("should add book");
        assert!(catalog_svc.delete("1234567890").await.expect("should delete"));
        assert!(catalog_svc.get_by_isbn("1234567890").await.expect("should load").is_none());
        assert!(!catalog_svc.delete("1234567890").await.expect("should delete"));
    }

    #[tokio::test]
    async fn test_should_persist_across_service_instances() {
        let dir = TempDir::new().expect("temp dir");
        let _ = build_service(&dir).create(&dune()).await.expect("should add book");

        let loaded = build_service(&dir).get_by_isbn("1234567890").await.expect("should load");
        assert!(loaded.is_some());
    }

    #[tokio::test]
    async fn test_should_not_lose_concurrent_creates() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc: Arc<dyn CatalogService> = Arc::from(build_service(&dir));

        let mut handles = vec![];
        for i in 0..20 {
            let svc = catalog_svc.clone();
            handles.push(tokio::spawn(async move {
                svc.create(&CreateBookDto::new(format!("{:010}", i).as_str(), "title")).await
            }));
        }
        for handle in handles {
            let _ = handle.await.expect("should join").expect("should add book");
        }
        assert_eq!(20, catalog_svc.list_all().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_generate_report() {
        let dir = TempDir::new().expect("temp dir");
        let catalog_svc = build_service(&dir);

        let mut book = dune();
        book.authors = vec!["Frank Herbert".to_string()];
        let _ = catalog_svc.create(&book).await.expect("should add book");
        let html = catalog_svc.generate_report().await.expect("should render");
        assert!(html.contains("<td>Dune</td>"));
        assert!(html.contains("<td>$9.99</td>"));
    }

    #[tokio::test]
    async fn test_should_surface_malformed_document() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("books.xml"), "<bookstore><book>").expect("should write");
        let catalog_svc = build_service(&dir);
        assert!(matches!(catalog_svc.list_all().await, Err(BookstoreError::MalformedDocument { .. })));
        assert!(matches!(catalog_svc.create(&dune()).await, Err(BookstoreError::MalformedDocument { .. })));
    }
}
