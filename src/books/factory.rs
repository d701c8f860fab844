use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::repository::xml_book_repository::XmlBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::XmlFile => {
            Box::new(XmlBookRepository::new(config.data_file.as_path()))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}
