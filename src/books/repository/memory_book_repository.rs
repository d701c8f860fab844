use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::books::domain::document::{decode, encode};
use crate::books::domain::model::BookstoreEntity;
use crate::books::repository::BookRepository;
use crate::core::bookstore::BookstoreResult;
use crate::core::repository::DocumentRepository;

// MemoryBookRepository keeps the encoded document in memory instead of on disk,
// so it goes through the same codec as the file repository.
#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    document: Mutex<Option<Vec<u8>>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository<BookstoreEntity> for MemoryBookRepository {
    async fn load(&self) -> BookstoreResult<BookstoreEntity> {
        match self.document.lock().await.as_ref() {
            Some(bytes) => decode(bytes),
            None => Ok(BookstoreEntity::default()),
        }
    }

    async fn save(&self, document: &BookstoreEntity) -> BookstoreResult<()> {
        let bytes = encode(document)?;
        *self.document.lock().await = Some(bytes);
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}
