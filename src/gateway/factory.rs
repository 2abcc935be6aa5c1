use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::InMemoryPublisher;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::InMemory => {
            Box::new(InMemoryPublisher::new())
        }
        GatewayPublisherVia::Log => {
            Box::new(LogPublisher::new())
        }
    }
}
