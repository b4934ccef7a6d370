use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::NotificationSink;

// LogSink keeps an audit trail of catalog notifications in the structured log
#[derive(Debug, Default)]
pub struct LogSink {}

impl LogSink {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl NotificationSink for LogSink {
    fn name(&self) -> String {
        "audit-log".to_string()
    }

    async fn receive(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let payload = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), kind = ?event.kind, payload = payload.as_str(), "catalog notification");
        Ok(())
    }
}
