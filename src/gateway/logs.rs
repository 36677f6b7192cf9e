use tracing::info;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every event as a structured log record and keeps nothing.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> serde_json::Result<()> {
        let json = serde_json::to_string(event)?;
        info!(event_id = %event.event_id, name = %event.name, group = %event.group, "published {}", json);
        Ok(())
    }
}
