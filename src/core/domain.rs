use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_DATA_FILE: &str = "books.xml";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration abstracts config options for the bookstore catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub data_file: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub store: RepositoryStore,
    pub lambda: bool,
}

impl Configuration {
    pub fn new(branch_id: &str, data_file: PathBuf) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            data_file,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            store: RepositoryStore::XmlFile,
            lambda: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let data_file = lookup("BOOKSTORE_DATA_FILE").unwrap_or(DEFAULT_DATA_FILE.to_string());
        let mut config = Configuration::new(
            lookup("BOOKSTORE_BRANCH").unwrap_or("dev".to_string()).as_str(),
            PathBuf::from(data_file));
        if let Some(addr) = lookup("BOOKSTORE_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(level) = lookup("BOOKSTORE_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(store) = lookup("BOOKSTORE_STORE") {
            config.store = RepositoryStore::from(store);
        }
        config.lambda = lookup("BOOKSTORE_LAMBDA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        config
    }
}
