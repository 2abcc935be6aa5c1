use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by catalog and roster records
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    #[serde(default = "default_seed")]
    pub seed_initial_data: bool,
    #[serde(default)]
    pub publisher: GatewayPublisherVia,
    #[serde(default)]
    pub json_logs: bool,
}

fn default_seed() -> bool {
    true
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            seed_initial_data: true,
            publisher: GatewayPublisherVia::InMemory,
            json_logs: false,
        }
    }

    pub fn from_json(data: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(data)?)
    }
}
