use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::LibrarySystem;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::parties::domain::model::LibrarianEntity;
use crate::patrons::domain::PatronService;

const SEED_BOOKS: [(&str, &str, &str); 3] = [
    ("The Master and Margarita", "Mikhail Bulgakov", "9785170906440"),
    ("Crime and Punishment", "Fyodor Dostoevsky", "9785041039048"),
    ("1984", "George Orwell", "9785170908338"),
];

const SEED_PATRONS: [(&str, &str); 2] = [
    ("Ivan Petrov", "U001"),
    ("Maria Sidorova", "U002"),
];

pub fn create_library_system(config: &Configuration) -> LibrarySystem {
    create_library_system_with(config, create_publisher(config.publisher))
}

// Same as `create_library_system` but publishes through the given publisher.
pub fn create_library_system_with(config: &Configuration, publisher: Box<dyn EventPublisher>) -> LibrarySystem {
    let mut system = LibrarySystem::new(config, publisher);
    if config.seed_initial_data {
        seed_initial_data(&mut system);
    }
    system
}

// Seeding only applies to an empty registry.
pub(crate) fn seed_initial_data(system: &mut LibrarySystem) {
    if !system.books.is_empty() || !system.patrons.is_empty() || !system.librarians.is_empty() {
        debug!(branch = system.branch_id(), "registry already populated, skipping seed data");
        return;
    }
    system.seed_librarian(LibrarianEntity::new("Anna Ivanova", "L001"));
    for (title, author, isbn) in SEED_BOOKS {
        system.add_book(BookEntity::new(title, author, isbn));
    }
    for (name, patron_id) in SEED_PATRONS {
        system.register_user(name, patron_id);
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::memory::publisher::InMemoryPublisher;
    use crate::parties::domain::PartyService;
    use crate::patrons::domain::PatronService;

    #[test]
    fn test_should_build_seeded_system() {
        let system = factory::create_library_system(&Configuration::new("test"));
        assert_eq!("test", system.branch_id());
        assert_eq!(3, system.get_all_books().len());
        assert_eq!(2, system.get_all_users().len());
        assert!(system.find_librarian_by_id("L001").is_some());
    }

    #[test]
    fn test_should_build_empty_system() {
        let mut config = Configuration::new("test");
        config.seed_initial_data = false;
        config.publisher = GatewayPublisherVia::Log;
        let system = factory::create_library_system(&config);
        assert!(system.get_all_books().is_empty());
        assert!(system.get_all_users().is_empty());
        assert!(system.find_librarian_by_id("L001").is_none());
    }

    #[test]
    fn test_should_build_system_with_publisher() {
        let publisher = InMemoryPublisher::new();
        let system = factory::create_library_system_with(&Configuration::new("test"), Box::new(publisher.clone()));
        assert_eq!(3, system.get_all_books().len());
        let names: Vec<String> = publisher.events().iter().map(|e| e.name.to_string()).collect();
        assert_eq!(vec!["book_added", "book_added", "book_added", "patron_registered", "patron_registered"], names);
    }

    #[test]
    fn test_should_not_seed_twice() {
        let publisher = InMemoryPublisher::new();
        let mut system = factory::create_library_system_with(&Configuration::new("test"), Box::new(publisher.clone()));
        publisher.clear();

        factory::seed_initial_data(&mut system);
        assert_eq!(3, system.get_all_books().len());
        assert_eq!(2, system.get_all_users().len());
        assert_eq!(1, system.librarians.len());
        assert!(publisher.events().is_empty());
    }
}
