use std::sync::Arc;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::find_book_cmd::{FindBookCommand, FindBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;
use crate::gateway::factory::{create_administrators, create_audit_sink, create_isbn_provider};
use crate::utils::console::{write_line, SharedOutput};

pub const FIRST_TITLE: &str = "El Quijote";
pub const SECOND_TITLE: &str = "Arquitectura de Software";

// wire_sinks registers one administrator per configured name plus the audit sink.
// Call it once per catalog, every registration receives every later broadcast.
pub async fn wire_sinks(catalog: &Arc<dyn CatalogService>, out: &SharedOutput) {
    for admin in create_administrators(catalog.configuration(), out) {
        catalog.register_sink(admin).await;
    }
    catalog.register_sink(create_audit_sink()).await;
}

// run_scenario adds two books, prints the adapted ISBN and borrows then returns
// the second book. Sinks are not registered here, see wire_sinks.
pub async fn run_scenario(catalog: Arc<dyn CatalogService>, out: SharedOutput) -> LibraryResult<()> {
    let add_cmd = AddBookCommand::new(catalog.clone());
    for title in [FIRST_TITLE, SECOND_TITLE] {
        let _ = add_cmd.execute(AddBookCommandRequest::new(title)).await?;
    }

    let isbn = create_isbn_provider();
    write_line(&out, format!("Adapted ISBN code: {}", isbn.get_code()).as_str())?;

    let found = FindBookCommand::new(catalog.clone())
        .execute(FindBookCommandRequest::new(SECOND_TITLE)).await;
    let book = match found {
        Ok(res) => res.book,
        Err(err) => {
            warn!("nothing to borrow or return: {:?}", err);
            return Ok(());
        }
    };
    if !book.is_borrowed() {
        let _ = BorrowBookCommand::new(catalog.clone())
            .execute(BorrowBookCommandRequest::new(book.book_id.to_string())).await?;
    }
    let _ = ReturnBookCommand::new(catalog.clone())
        .execute(ReturnBookCommandRequest::new(book.book_id.to_string())).await?;

    info!("scenario finished with {} books and {} sinks", catalog.books().await.len(), catalog.sinks().await.len());
    Ok(())
}
