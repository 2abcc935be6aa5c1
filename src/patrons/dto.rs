use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::parties::domain::Party;
use crate::parties::domain::model::PatronEntity;


// PatronDto is the roster view of a library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub borrowed_book_ids: Vec<String>,
    pub num_borrowed: usize,
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.id(),
            name: other.name().to_string(),
            borrowed_book_ids: other.borrowed_books().to_vec(),
            num_borrowed: other.borrowed_books().len(),
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}
