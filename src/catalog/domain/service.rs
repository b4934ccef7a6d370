use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, SinkFailurePolicy};
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::NotificationSink;

pub struct CatalogServiceImpl {
    config: Configuration,
    books: RwLock<Vec<BookEntity>>,
    sinks: RwLock<Vec<Arc<dyn NotificationSink>>>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration) -> Self {
        Self {
            config: config.clone(),
            books: RwLock::new(Vec::new()),
            sinks: RwLock::new(Vec::new()),
        }
    }

    // applies `change` to the book under the write lock and returns the updated snapshot
    async fn transition(&self, id: &str, required: BookStatus,
                        change: fn(&mut BookEntity)) -> LibraryResult<BookDto> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|b| b.book_id == id)
            .ok_or_else(|| LibraryError::not_found(format!("book with id {} not found", id).as_str()))?;
        if book.status() != required {
            return Err(LibraryError::validation(format!("book {} is {} but must be {}",
                                                        book.book_id, book.status(), required).as_str(), Some("400".to_string())));
        }
        change(&mut *book);
        Ok(BookDto::from(&*book))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    fn configuration(&self) -> &Configuration {
        &self.config
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.books.write().await.push(BookEntity::from(book));
        let _ = self.broadcast(&DomainEvent::added(book)).await?;
        Ok(book.clone())
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        self.books.read().await.iter()
            .find(|b| b.has_title(title))
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("book with title {} not found", title).as_str()))
    }

    async fn books(&self) -> Vec<BookDto> {
        self.books.read().await.iter().map(BookDto::from).collect()
    }

    async fn borrow_book(&self, id: &str) -> LibraryResult<BookDto> {
        let book = self.transition(id, BookStatus::Available, BookEntity::borrow).await?;
        let _ = self.broadcast(&DomainEvent::borrowed(&book)).await?;
        Ok(book)
    }

    async fn return_book(&self, id: &str) -> LibraryResult<BookDto> {
        let book = self.transition(id, BookStatus::Borrowed, BookEntity::returned).await?;
        let _ = self.broadcast(&DomainEvent::returned(&book)).await?;
        Ok(book)
    }

    async fn register_sink(&self, sink: Arc<dyn NotificationSink>) {
        debug!("registering sink {}", sink.name());
        self.sinks.write().await.push(sink);
    }

    async fn sinks(&self) -> Vec<String> {
        self.sinks.read().await.iter().map(|s| s.name()).collect()
    }

    async fn broadcast(&self, event: &DomainEvent) -> LibraryResult<usize> {
        // snapshot so no lock is held while sinks run
        let sinks: Vec<Arc<dyn NotificationSink>> = self.sinks.read().await.clone();
        let mut delivered = 0;
        for sink in sinks {
            match sink.receive(event).await {
                Ok(_) => delivered += 1,
                Err(err) => match self.config.sink_failure {
                    SinkFailurePolicy::Propagate => return Err(err),
                    SinkFailurePolicy::Isolate => {
                        warn!("sink {} failed to receive {}: {}", sink.name(), event.event_id, err);
                    }
                },
            }
        }
        debug!("delivered {} to {} sinks", event.name, delivered);
        Ok(delivered)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            book_status: other.book_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            book_status: other.book_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
