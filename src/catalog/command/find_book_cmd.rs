use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBookCommandRequest {
    pub(crate) title: String,
}

impl FindBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct FindBookCommandResponse {
    pub book: BookDto,
}

impl FindBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<FindBookCommandRequest, FindBookCommandResponse> for FindBookCommand {
    async fn execute(&self, req: FindBookCommandRequest) -> Result<FindBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_title(req.title.as_str())
            .await.map_err(CommandError::from).map(FindBookCommandResponse::new)
    }
}
