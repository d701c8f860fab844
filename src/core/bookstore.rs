use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BookstoreError {
    // request data is missing or invalid, e.g. empty isbn or title
    Validation {
        message: String,
    },
    // a book with the same isbn already exists in the catalog
    DuplicateKey {
        message: String,
    },
    // the persisted document could not be parsed or encoded, there is no automatic recovery.
    MalformedDocument {
        message: String,
    },
    // reading or writing the backing document failed
    Storage {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookstoreError {
    pub fn validation(message: &str) -> BookstoreError {
        BookstoreError::Validation { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> BookstoreError {
        BookstoreError::DuplicateKey { message: message.to_string() }
    }

    pub fn malformed_document(message: &str) -> BookstoreError {
        BookstoreError::MalformedDocument { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Storage { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            BookstoreError::Validation { message } => { message }
            BookstoreError::DuplicateKey { message } => { message }
            BookstoreError::MalformedDocument { message } => { message }
            BookstoreError::Storage { message, .. } => { message }
        }
    }
}

impl From<std::io::Error> for BookstoreError {
    fn from(err: std::io::Error) -> Self {
        BookstoreError::storage(
            format!("document io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<std::str::Utf8Error> for BookstoreError {
    fn from(err: std::str::Utf8Error) -> Self {
        BookstoreError::malformed_document(format!("document is not valid utf-8 {}", err).as_str())
    }
}

impl From<quick_xml::DeError> for BookstoreError {
    fn from(err: quick_xml::DeError) -> Self {
        BookstoreError::malformed_document(format!("xml parsing {}", err).as_str())
    }
}

impl From<quick_xml::SeError> for BookstoreError {
    fn from(err: quick_xml::SeError) -> Self {
        BookstoreError::malformed_document(format!("xml serialization {}", err).as_str())
    }
}

impl Display for BookstoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookstoreError::Validation { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::MalformedDocument { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for BookstoreError {}

/// A specialized Result type for the catalog.
pub type BookstoreResult<T> = Result<T, BookstoreError>;
