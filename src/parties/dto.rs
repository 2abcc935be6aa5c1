use serde::{Deserialize, Serialize};
use crate::core::library::PartyKind;
use crate::parties::domain::Party;

// PartyDto describes a signed-in person and the actions offered to them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PartyDto {
    pub party_id: String,
    pub name: String,
    pub kind: PartyKind,
    pub menu_options: Vec<String>,
}

impl From<&dyn Party> for PartyDto {
    fn from(other: &dyn Party) -> Self {
        Self {
            party_id: other.id(),
            name: other.name().to_string(),
            kind: other.kind(),
            menu_options: other.menu_options().iter().map(|o| o.to_string()).collect(),
        }
    }
}
