use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::books::domain::document::{decode, encode};
use crate::books::domain::model::BookstoreEntity;
use crate::books::repository::BookRepository;
use crate::core::bookstore::BookstoreResult;
use crate::core::repository::DocumentRepository;

#[derive(Debug)]
pub(crate) struct XmlBookRepository {
    path: PathBuf,
}

impl XmlBookRepository {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    // sibling file the new contents are staged in before replacing the document
    fn staging_path(&self) -> PathBuf {
        let file_name = self.path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or("books.xml".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}

#[async_trait]
impl DocumentRepository<BookstoreEntity> for XmlBookRepository {
    async fn load(&self) -> BookstoreResult<BookstoreEntity> {
        match fs::read(&self.path).await {
            Ok(bytes) => decode(&bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("catalog document {:?} does not exist, starting empty", self.path);
                Ok(BookstoreEntity::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, document: &BookstoreEntity) -> BookstoreResult<()> {
        let bytes = encode(document)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let staging = self.staging_path();
        let mut file = fs::File::create(&staging).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&staging, &self.path).await?;
        debug!("saved {} books ({} bytes) to {:?}", document.books.len(), bytes.len(), self.path);
        Ok(())
    }
}

impl BookRepository for XmlBookRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
