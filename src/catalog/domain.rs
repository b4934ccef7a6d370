pub mod service;

use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::NotificationSink;

#[async_trait]
pub trait CatalogService: Sync + Send {
    fn configuration(&self) -> &Configuration;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto>;
    async fn books(&self) -> Vec<BookDto>;
    async fn borrow_book(&self, id: &str) -> LibraryResult<BookDto>;
    async fn return_book(&self, id: &str) -> LibraryResult<BookDto>;
    async fn register_sink(&self, sink: Arc<dyn NotificationSink>);
    async fn sinks(&self) -> Vec<String>;
    async fn broadcast(&self, event: &DomainEvent) -> LibraryResult<usize>;
}
