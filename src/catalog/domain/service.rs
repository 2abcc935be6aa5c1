use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;
use crate::parties::domain::ActiveParty;
use crate::parties::domain::model::{LibrarianEntity, PatronEntity};

// LibrarySystem is the in-memory registry behind the lending desk. It owns every book,
// patron and librarian record and remembers who is signed in.
//
// Uniqueness of ISBNs and ids is not checked here. `add_book` and `register_user` append
// whatever they are given, the command layer does the lookup before inserting.
pub struct LibrarySystem {
    pub(crate) branch_id: String,
    pub(crate) books: Vec<BookEntity>,
    pub(crate) patrons: Vec<PatronEntity>,
    pub(crate) librarians: Vec<LibrarianEntity>,
    pub(crate) current_person: Option<ActiveParty>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibrarySystem {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            books: vec![],
            patrons: vec![],
            librarians: vec![],
            current_person: None,
            events_publisher,
        }
    }

    pub fn branch_id(&self) -> &str {
        &self.branch_id
    }

    // librarians only enter the roster while the system is being set up
    pub(crate) fn seed_librarian(&mut self, librarian: LibrarianEntity) {
        self.librarians.push(librarian);
    }

    pub(crate) fn publish(&mut self, event: serde_json::Result<DomainEvent>) {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                warn!(branch = self.branch_id.as_str(), "failed to build domain event {:?}", err);
                return;
            }
        };
        if let Err(err) = self.events_publisher.publish(&event) {
            warn!(branch = self.branch_id.as_str(), event = event.name.as_str(), "failed to publish domain event {}", err);
        }
    }

    pub(crate) fn branch_metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }
}

impl CatalogService for LibrarySystem {
    fn add_book(&mut self, book: BookEntity) {
        info!(isbn = book.isbn(), "adding book to catalog");
        let event = DomainEvent::added(
            "book_added", "catalog", book.isbn(), &self.branch_metadata(), &BookDto::from(&book));
        self.books.push(book);
        self.publish(event);
    }

    fn remove_book(&mut self, isbn: &str) -> bool {
        let Some(pos) = self.books.iter().position(|b| b.isbn() == isbn) else {
            debug!(isbn, "no book to remove");
            return false;
        };
        let removed = self.books.remove(pos);
        info!(isbn, "removed book from catalog");
        let event = DomainEvent::deleted(
            "book_removed", "catalog", isbn, &self.branch_metadata(), &BookDto::from(&removed));
        self.publish(event);
        true
    }

    fn get_all_books(&self) -> &[BookEntity] {
        &self.books
    }

    fn get_available_books(&self) -> Vec<&BookEntity> {
        self.books.iter().filter(|b| b.is_available()).collect()
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    fn find_book_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut BookEntity> {
        self.books.iter_mut().find(|b| b.isbn() == isbn)
    }
}
