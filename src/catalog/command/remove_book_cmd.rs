use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let deleted = self.catalog_service.delete(req.isbn.as_str()).await.map_err(CommandError::from)?;
        if deleted {
            Ok(RemoveBookCommandResponse::new())
        } else {
            Err(CommandError::NotFound { message: "Book not found".to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::command::tests::build_memory_service;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = build_memory_service();
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("1234567890", "Dune"))
            .await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new("1234567890")).await.expect("should remove book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("1234567890")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
