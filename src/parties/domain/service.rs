use tracing::{debug, info};
use crate::catalog::domain::service::LibrarySystem;
use crate::core::domain::Identifiable;
use crate::core::library::PartyKind;
use crate::parties::domain::{ActiveParty, PartyService, Person};
use crate::parties::domain::model::LibrarianEntity;
use crate::patrons::domain::PatronService;

impl PartyService for LibrarySystem {
    fn find_librarian_by_id(&self, librarian_id: &str) -> Option<&LibrarianEntity> {
        self.librarians.iter().find(|l| l.id() == librarian_id)
    }

    fn set_current_person(&mut self, person: ActiveParty) {
        info!(kind = %person.kind, id = person.id.as_str(), "signed in");
        self.current_person = Some(person);
    }

    fn get_current_person(&self) -> Option<&ActiveParty> {
        self.current_person.as_ref()
    }

    fn clear_current_person(&mut self) {
        if let Some(person) = self.current_person.take() {
            debug!(id = person.id.as_str(), "signed out");
        }
    }

    fn current_person(&self) -> Option<Person<'_>> {
        let active = self.current_person.as_ref()?;
        match active.kind {
            PartyKind::Patron => self.find_user_by_id(active.id.as_str()).map(Person::Patron),
            PartyKind::Librarian => self.find_librarian_by_id(active.id.as_str()).map(Person::Librarian),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::PartyKind;
    use crate::parties::domain::{ActiveParty, Party, PartyService, Person};
    use crate::patrons::domain::PatronService;

    #[test]
    fn test_should_find_seeded_librarian() {
        let system = factory::create_library_system(&Configuration::new("test"));
        let librarian = system.find_librarian_by_id("L001").expect("should return librarian");
        assert_eq!("Anna Ivanova", librarian.name());
        assert!(system.find_librarian_by_id("U001").is_none());
    }

    #[test]
    fn test_should_start_without_current_person() {
        let system = factory::create_library_system(&Configuration::new("test"));
        assert!(system.get_current_person().is_none());
        assert!(system.current_person().is_none());
    }

    #[test]
    fn test_should_set_current_person() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        let key = ActiveParty::of(system.find_user_by_id("U002").expect("should return patron"));
        system.set_current_person(key.clone());

        assert_eq!(Some(&key), system.get_current_person());
        match system.current_person() {
            Some(Person::Patron(patron)) => assert_eq!("Maria Sidorova", patron.name()),
            other => panic!("unexpected current person {:?}", other),
        }
    }

    #[test]
    fn test_should_switch_and_clear_current_person() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        system.set_current_person(ActiveParty::new(PartyKind::Patron, "U001"));
        system.set_current_person(ActiveParty::new(PartyKind::Librarian, "L001"));
        let person = system.current_person().expect("should resolve librarian");
        assert!(person.as_party().is_librarian());

        system.clear_current_person();
        assert!(system.get_current_person().is_none());
    }

    #[test]
    fn test_should_keep_unknown_current_person_key() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        system.set_current_person(ActiveParty::new(PartyKind::Librarian, "L999"));
        assert_eq!(Some(&ActiveParty::new(PartyKind::Librarian, "L999")), system.get_current_person());
        assert!(system.current_person().is_none());
    }
}
