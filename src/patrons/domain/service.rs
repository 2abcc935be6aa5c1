use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::service::LibrarySystem;
use crate::core::domain::Identifiable;
use crate::core::events::DomainEvent;
use crate::parties::domain::model::PatronEntity;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

impl PatronService for LibrarySystem {
    fn register_user(&mut self, name: &str, patron_id: &str) -> &PatronEntity {
        info!(patron_id, "registering patron");
        let patron = PatronEntity::new(name, patron_id);
        let event = DomainEvent::added(
            "patron_registered", "patrons", patron_id, &self.branch_metadata(), &PatronDto::from(&patron));
        self.publish(event);
        self.patrons.push(patron);
        &self.patrons[self.patrons.len() - 1]
    }

    fn get_all_users(&self) -> &[PatronEntity] {
        &self.patrons
    }

    fn find_user_by_id(&self, patron_id: &str) -> Option<&PatronEntity> {
        self.patrons.iter().find(|p| p.id() == patron_id)
    }

    fn borrowed_books_of(&self, patron_id: &str) -> Vec<&BookEntity> {
        match self.find_user_by_id(patron_id) {
            Some(patron) => patron.borrowed_books().iter()
                .filter_map(|book_id| self.books.iter().find(|b| b.book_id() == book_id))
                .collect(),
            None => vec![],
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::LibrarySystem;
    use crate::catalog::factory;
    use crate::core::domain::{Configuration, Identifiable};
    use crate::gateway::memory::publisher::InMemoryPublisher;
    use crate::parties::domain::Party;
    use crate::patrons::domain::PatronService;

    #[test]
    fn test_should_register_patron() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        let patron = system.register_user("Ivan", "U010");
        assert_eq!("Ivan", patron.name());

        let loaded = system.find_user_by_id("U010").expect("should return patron");
        assert_eq!("U010", loaded.id().as_str());
        assert!(loaded.borrowed_books().is_empty());
        assert_eq!(3, system.get_all_users().len());
    }

    #[test]
    fn test_should_list_seeded_patrons_in_order() {
        let system = factory::create_library_system(&Configuration::new("test"));
        let ids: Vec<String> = system.get_all_users().iter().map(|p| p.id()).collect();
        assert_eq!(vec!["U001".to_string(), "U002".to_string()], ids);
    }

    #[test]
    fn test_should_not_find_unknown_patron() {
        let system = factory::create_library_system(&Configuration::new("test"));
        assert!(system.find_user_by_id("U999").is_none());
        // librarian ids live in their own roster
        assert!(system.find_user_by_id("L001").is_none());
    }

    #[test]
    fn test_should_register_duplicate_id_without_check() {
        let publisher = InMemoryPublisher::new();
        let mut system = LibrarySystem::new(&Configuration::new("test"), Box::new(publisher.clone()));
        system.register_user("Ivan", "U010");
        system.register_user("Ivan Jr.", "U010");
        assert_eq!(2, system.get_all_users().len());
        assert_eq!("Ivan", system.find_user_by_id("U010").expect("should return patron").name());
        assert_eq!(2, publisher.events().len());
    }

    #[test]
    fn test_should_resolve_borrowed_books() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        assert!(system.borrowed_books_of("U001").is_empty());
        assert!(system.borrowed_books_of("U999").is_empty());

        let book = system.books.iter_mut().find(|b| b.isbn() == "9785170908338").expect("should return book");
        let patron = system.patrons.iter_mut().find(|p| p.id() == "U001").expect("should return patron");
        assert!(patron.borrow_book(book));
        assert_eq!(vec!["1984"], system.borrowed_books_of("U001").iter().map(|b| b.title()).collect::<Vec<_>>());

        assert!(system.remove_book("9785170908338"));
        assert!(system.borrowed_books_of("U001").is_empty());
        assert_eq!(1, system.find_user_by_id("U001").expect("should return patron").borrowed_books().len());
    }

    #[test]
    fn test_should_not_resolve_readded_isbn_as_borrowed() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        let book = system.books.iter_mut().find(|b| b.isbn() == "9785170906440").expect("should return book");
        let patron = system.patrons.iter_mut().find(|p| p.id() == "U001").expect("should return patron");
        assert!(patron.borrow_book(book));

        assert!(system.remove_book("9785170906440"));
        system.add_book(BookEntity::new("New Copy", "X", "9785170906440"));

        let borrowed = system.borrowed_books_of("U001");
        assert!(borrowed.iter().all(|b| !b.is_available()));
        assert!(borrowed.iter().all(|b| b.title() != "New Copy"));
        assert!(borrowed.is_empty());
        assert!(system.find_book_by_isbn("9785170906440").expect("should return book").is_available());
    }
}
