use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ReturnBookCommandRequest {
    book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let add_cmd = AddBookCommand::new(svc.clone());
        let borrow_cmd = BorrowBookCommand::new(svc.clone());
        let return_cmd = ReturnBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("test book")).await.expect("should add book");
        let book_id = res.book.book_id.to_string();

        let early = return_cmd.execute(ReturnBookCommandRequest::new(book_id.to_string())).await;
        assert!(matches!(early, Err(CommandError::Validation { .. })));

        let _ = borrow_cmd.execute(BorrowBookCommandRequest::new(book_id.to_string())).await.expect("should borrow book");
        let returned = return_cmd.execute(ReturnBookCommandRequest::new(book_id)).await.expect("should return book");
        assert_eq!(BookStatus::Available, returned.book.book_status);
    }
}
