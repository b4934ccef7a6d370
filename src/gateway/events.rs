use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

// NotificationSink is anything the catalog can broadcast a notification to
#[async_trait]
pub trait NotificationSink: Sync + Send {
    // identity of the sink, used in logs
    fn name(&self) -> String;

    async fn receive(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
