use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::PartyKind;
use crate::parties::domain::model::{LibrarianEntity, PatronEntity};

pub mod model;
pub mod service;

// PartyService covers the librarian roster and the signed-in person.
pub trait PartyService {
    fn find_librarian_by_id(&self, librarian_id: &str) -> Option<&LibrarianEntity>;
    // Not validated against the rosters.
    fn set_current_person(&mut self, person: ActiveParty);
    fn get_current_person(&self) -> Option<&ActiveParty>;
    fn clear_current_person(&mut self);
    /// Resolves the signed-in key to its roster record, `None` when nobody is signed in
    /// or the key refers to no record.
    fn current_person(&self) -> Option<Person<'_>>;
}

// Party is a person known to the library. The roles differ only in the actions they are offered.
pub trait Party: Identifiable {
    fn name(&self) -> &str;
    fn kind(&self) -> PartyKind;
    fn menu_options(&self) -> &'static [&'static str];

    fn is_librarian(&self) -> bool {
        self.kind() == PartyKind::Librarian
    }
}

// ActiveParty keys the person currently signed in at the desk.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ActiveParty {
    pub kind: PartyKind,
    pub id: String,
}

impl ActiveParty {
    pub fn new(kind: PartyKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }

    pub fn of(party: &dyn Party) -> Self {
        Self::new(party.kind(), party.id().as_str())
    }
}

// Person borrows a roster record of either role.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Person<'a> {
    Patron(&'a PatronEntity),
    Librarian(&'a LibrarianEntity),
}

impl<'a> Person<'a> {
    pub fn as_party(&self) -> &'a dyn Party {
        match *self {
            Person::Patron(patron) => patron,
            Person::Librarian(librarian) => librarian,
        }
    }
}
