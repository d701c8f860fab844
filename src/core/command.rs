use async_trait::async_trait;
use crate::core::bookstore::BookstoreError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Document {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Validation { message } => { message }
            CommandError::DuplicateKey { message } => { message }
            CommandError::NotFound { message } => { message }
            CommandError::Document { message } => { message }
            CommandError::Storage { message, .. } => { message }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<BookstoreError> for CommandError {
    fn from(other: BookstoreError) -> Self {
        match other {
            BookstoreError::Validation { message } => {
                CommandError::Validation { message }
            }
            BookstoreError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            BookstoreError::MalformedDocument { message } => {
                CommandError::Document { message }
            }
            BookstoreError::Storage { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
        }
    }
}
