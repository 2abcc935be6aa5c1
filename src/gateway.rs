use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs {
    pub mod publisher;
}
pub mod memory {
    pub mod publisher;
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    #[default]
    InMemory,
    Log,
}
