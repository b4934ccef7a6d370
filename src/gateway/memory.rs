use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::NotificationSink;

// MemorySink records every delivery into a journal shared between sinks, so tests
// can assert both what each sink saw and the order across sinks.
pub(crate) struct MemorySink {
    name: String,
    journal: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemorySink {
    pub(crate) fn new(name: &str, journal: Arc<Mutex<Vec<(String, String)>>>) -> Self {
        Self {
            name: name.to_string(),
            journal,
        }
    }
}

#[async_trait]
impl NotificationSink for MemorySink {
    fn name(&self) -> String {
        self.name.to_string()
    }

    async fn receive(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.journal.lock().expect("journal lock").push((self.name.to_string(), event.message.to_string()));
        Ok(())
    }
}

pub(crate) struct FailingSink {}

#[async_trait]
impl NotificationSink for FailingSink {
    fn name(&self) -> String {
        "failing".to_string()
    }

    async fn receive(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
        Err(LibraryError::runtime("sink unavailable", None))
    }
}

pub(crate) fn journal() -> Arc<Mutex<Vec<(String, String)>>> {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn entries(journal: &Arc<Mutex<Vec<(String, String)>>>) -> Vec<(String, String)> {
    journal.lock().expect("journal lock").clone()
}

// MissingTitleCatalog wraps a real catalog but never finds a book by title, and
// counts the borrow and return calls it receives.
pub(crate) struct MissingTitleCatalog {
    inner: Arc<dyn CatalogService>,
    state_changes: Mutex<usize>,
}

impl MissingTitleCatalog {
    pub(crate) fn new(inner: Arc<dyn CatalogService>) -> Self {
        Self {
            inner,
            state_changes: Mutex::new(0),
        }
    }

    pub(crate) fn state_changes(&self) -> usize {
        *self.state_changes.lock().expect("counter lock")
    }
}

#[async_trait]
impl CatalogService for MissingTitleCatalog {
    fn configuration(&self) -> &Configuration {
        self.inner.configuration()
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.inner.add_book(book).await
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        Err(LibraryError::not_found(format!("book with title {} not found", title).as_str()))
    }

    async fn books(&self) -> Vec<BookDto> {
        self.inner.books().await
    }

    async fn borrow_book(&self, id: &str) -> LibraryResult<BookDto> {
        *self.state_changes.lock().expect("counter lock") += 1;
        self.inner.borrow_book(id).await
    }

    async fn return_book(&self, id: &str) -> LibraryResult<BookDto> {
        *self.state_changes.lock().expect("counter lock") += 1;
        self.inner.return_book(id).await
    }

    async fn register_sink(&self, sink: Arc<dyn NotificationSink>) {
        self.inner.register_sink(sink).await
    }

    async fn sinks(&self) -> Vec<String> {
        self.inner.sinks().await
    }

    async fn broadcast(&self, event: &DomainEvent) -> LibraryResult<usize> {
        self.inner.broadcast(event).await
    }
}
