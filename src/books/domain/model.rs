use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

pub const DEFAULT_LANGUAGE: &str = "en";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

// BookTitle carries the title text along with its language tag, which is
// persisted as the `lang` attribute of the title element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookTitle {
    #[serde(rename = "@lang", default = "default_language")]
    pub language: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl BookTitle {
    pub fn new(value: &str, language: &str) -> Self {
        let language = if language.is_empty() { DEFAULT_LANGUAGE } else { language };
        Self {
            language: language.to_string(),
            value: value.to_string(),
        }
    }
}

impl Default for BookTitle {
    fn default() -> Self {
        BookTitle::new("", DEFAULT_LANGUAGE)
    }
}

// BookEntity is a single catalog record. The category is persisted as an
// attribute, so it has to be declared before the child elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    #[serde(rename = "@category", default)]
    pub category: String,
    pub isbn: String,
    #[serde(default)]
    pub title: BookTitle,
    #[serde(rename = "author", default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(with = "rust_decimal::serde::str", default)]
    pub price: Decimal,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str) -> Self {
        Self {
            category: String::new(),
            isbn: isbn.to_string(),
            title: BookTitle::new(title, DEFAULT_LANGUAGE),
            authors: vec![],
            year: 0,
            price: Decimal::ZERO,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.value.as_str()
    }

    fn language(&self) -> &str {
        self.title.language.as_str()
    }

    fn authors(&self) -> &[String] {
        &self.authors
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn price(&self) -> Decimal {
        self.price
    }
}

// BookstoreEntity is the catalog aggregate, it is always loaded and saved as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "bookstore")]
pub(crate) struct BookstoreEntity {
    #[serde(rename = "book", default)]
    pub books: Vec<BookEntity>,
}

impl BookstoreEntity {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self { books }
    }

    pub fn find(&self, isbn: &str) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.id() == isbn)
    }

    pub fn find_mut(&mut self, isbn: &str) -> Option<&mut BookEntity> {
        self.books.iter_mut().find(|b| b.id() == isbn)
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.find(isbn).is_some()
    }

    // removes the first book matching isbn
    pub fn remove(&mut self, isbn: &str) -> Option<BookEntity> {
        self.books.iter().position(|b| b.id() == isbn).map(|ndx| self.books.remove(ndx))
    }
}
