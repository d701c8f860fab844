pub mod add_book_cmd;
pub mod book_report_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod update_book_cmd;

#[cfg(test)]
pub(crate) mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    pub(crate) fn build_memory_service() -> Arc<dyn CatalogService> {
        let config = Configuration::new("test", PathBuf::from("books.xml"));
        Arc::from(factory::create_catalog_service(&config, RepositoryStore::Memory))
    }
}
