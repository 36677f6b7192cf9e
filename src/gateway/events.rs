use std::fmt::Debug;
use crate::core::events::DomainEvent;

// EventPublisher hands domain events to whatever is observing the registry.
pub trait EventPublisher: Debug {
    fn publish(&self, event: &DomainEvent) -> serde_json::Result<()>;

    // events retained by the publisher, oldest first
    fn published(&self) -> Vec<DomainEvent> {
        vec![]
    }
}
