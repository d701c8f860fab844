use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::bookstore::BookstoreResult;

// DocumentRepository persists a whole aggregate as a single document, there is
// no record level access.
#[async_trait]
pub trait DocumentRepository<Document>: Sync + Send {
    // loads the entire document, an absent document yields the empty aggregate
    async fn load(&self) -> BookstoreResult<Document>;

    // replaces the entire document
    async fn save(&self, document: &Document) -> BookstoreResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    XmlFile,
    Memory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "memory" => RepositoryStore::Memory,
            _ => RepositoryStore::XmlFile,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::XmlFile => write!(f, "xml"),
            RepositoryStore::Memory => write!(f, "memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_format_repository_store() {
        for store in [RepositoryStore::XmlFile, RepositoryStore::Memory] {
            assert_eq!(store, RepositoryStore::from(store.to_string()));
        }
        assert_eq!(RepositoryStore::XmlFile, RepositoryStore::from("unknown".to_string()));
    }
}
