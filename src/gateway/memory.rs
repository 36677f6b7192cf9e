use std::cell::RefCell;
use tracing::debug;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps every published event in process memory.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: RefCell<Vec<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(vec![]),
        }
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> serde_json::Result<()> {
        debug!(event_id = %event.event_id, name = %event.name, "retaining event");
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }

    fn published(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }
}
