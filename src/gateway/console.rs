use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::NotificationSink;
use crate::utils::console::{write_line, SharedOutput};

// Administrator prints every notification it receives, prefixed with its name
pub struct Administrator {
    name: String,
    out: SharedOutput,
}

impl Administrator {
    pub fn new(name: &str, out: SharedOutput) -> Self {
        Self {
            name: name.to_string(),
            out,
        }
    }
}

#[async_trait]
impl NotificationSink for Administrator {
    fn name(&self) -> String {
        self.name.to_string()
    }

    async fn receive(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        write_line(&self.out, format!("{} received notification: {}", self.name, event.message).as_str())
    }
}
