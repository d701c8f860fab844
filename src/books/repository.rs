pub mod memory_book_repository;
pub mod xml_book_repository;

use crate::books::domain::model::BookstoreEntity;
use crate::core::repository::DocumentRepository;

pub(crate) trait BookRepository: DocumentRepository<BookstoreEntity> {
    // describes where the catalog document lives, used for logging
    fn location(&self) -> String;
}
