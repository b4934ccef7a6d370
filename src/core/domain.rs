use serde::{Deserialize, Serialize};

// SinkFailurePolicy decides what a broadcast does when one sink fails to receive
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum SinkFailurePolicy {
    // return the first failure to the caller, later sinks are not notified
    #[default]
    Propagate,
    // log the failure and keep notifying the remaining sinks
    Isolate,
}

// Configuration abstracts config options for library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub administrators: Vec<String>,
    pub sink_failure: SinkFailurePolicy,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            administrators: vec!["Carlos".to_string(), "Andrea".to_string()],
            sink_failure: SinkFailurePolicy::Propagate,
        }
    }

    pub fn with_sink_failure(mut self, policy: SinkFailurePolicy) -> Self {
        self.sink_failure = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, SinkFailurePolicy};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(vec!["Carlos".to_string(), "Andrea".to_string()], config.administrators);
        assert_eq!(SinkFailurePolicy::Propagate, config.sink_failure);
    }

    #[tokio::test]
    async fn test_should_override_sink_failure() {
        let config = Configuration::new("test").with_sink_failure(SinkFailurePolicy::Isolate);
        assert_eq!(SinkFailurePolicy::Isolate, config.sink_failure);
    }
}
