use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::console::Administrator;
use crate::gateway::events::NotificationSink;
use crate::gateway::isbn::adapter::IsbnAdapter;
use crate::gateway::isbn::external::ExternalIsbnSystem;
use crate::gateway::isbn::IsbnProvider;
use crate::gateway::logs::LogSink;
use crate::utils::console::SharedOutput;

// one administrator per configured name, in configuration order
pub fn create_administrators(config: &Configuration, out: &SharedOutput) -> Vec<Arc<dyn NotificationSink>> {
    config.administrators.iter()
        .map(|name| Arc::new(Administrator::new(name.as_str(), out.clone())) as Arc<dyn NotificationSink>)
        .collect()
}

pub fn create_audit_sink() -> Arc<dyn NotificationSink> {
    Arc::new(LogSink::new())
}

pub fn create_isbn_provider() -> Box<dyn IsbnProvider> {
    Box::new(IsbnAdapter::new(ExternalIsbnSystem::new()))
}
