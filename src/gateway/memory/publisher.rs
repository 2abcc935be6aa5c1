use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// InMemoryPublisher keeps published events in order. Clones share the same buffer, so a
// shell can keep one handle while the registry owns another.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventPublisher for InMemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
