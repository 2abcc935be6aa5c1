use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

// EventPublisher hands domain events to whatever is listening outside the registry.
pub trait EventPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()>;
}
