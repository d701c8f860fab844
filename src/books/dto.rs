use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BookTitle, DEFAULT_LANGUAGE};
use crate::core::domain::Identifiable;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

// text values are stored trimmed since the xml document does not keep
// surrounding whitespace, blank author names are dropped
fn trimmed_authors(authors: &[String]) -> Vec<String> {
    authors.iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(|a| a.to_string())
        .collect()
}

// BookDto is the flattened view of a catalog record returned by every read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub language: String,
    pub authors: Vec<String>,
    pub category: String,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

// CreateBookDto carries a new record including its isbn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBookDto {
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub price: Decimal,
}

impl CreateBookDto {
    pub fn new(isbn: &str, title: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            language: default_language(),
            authors: vec![],
            category: String::new(),
            year: 0,
            price: Decimal::ZERO,
        }
    }
}

// UpdateBookDto carries the mutable fields only, the isbn is taken from the addressed resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateBookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub price: Decimal,
}

impl UpdateBookDto {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            language: default_language(),
            authors: vec![],
            category: String::new(),
            year: 0,
            price: Decimal::ZERO,
        }
    }

    // overwrites every mutable field of the record, the isbn is left untouched
    pub fn apply_to(&self, book: &mut BookEntity) {
        book.title = BookTitle::new(self.title.trim(), self.language.trim());
        book.authors = trimmed_authors(&self.authors);
        book.category = self.category.trim().to_string();
        book.year = self.year;
        book.price = self.price;
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn language(&self) -> &str {
        self.language.as_str()
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

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.value.to_string(),
            language: other.title.language.to_string(),
            authors: other.authors.clone(),
            category: other.category.to_string(),
            year: other.year,
            price: other.price,
        }
    }
}

impl From<&CreateBookDto> for BookEntity {
    fn from(other: &CreateBookDto) -> Self {
        Self {
            category: other.category.trim().to_string(),
            isbn: other.isbn.trim().to_string(),
            title: BookTitle::new(other.title.trim(), other.language.trim()),
            authors: trimmed_authors(&other.authors),
            year: other.year,
            price: other.price,
        }
    }
}
