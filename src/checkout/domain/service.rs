use tracing::{debug, info};
use crate::books::dto::BookDto;
use crate::catalog::domain::service::LibrarySystem;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Identifiable;
use crate::core::events::DomainEvent;

impl CheckoutService for LibrarySystem {
    fn borrow_book(&mut self, patron_id: &str, isbn: &str) -> bool {
        let Some(patron) = self.patrons.iter_mut().find(|p| p.id() == patron_id) else {
            debug!(patron_id, "no patron to borrow for");
            return false;
        };
        let Some(book) = self.books.iter_mut().find(|b| b.isbn() == isbn) else {
            debug!(isbn, "no book to borrow");
            return false;
        };
        if !patron.borrow_book(book) {
            debug!(patron_id, isbn, "book is already checked out");
            return false;
        }
        let dto = BookDto::from(&*book);
        info!(patron_id, isbn, "book checked out");
        let mut metadata = self.branch_metadata();
        metadata.insert("patron_id".to_string(), patron_id.to_string());
        let event = DomainEvent::updated("book_checkout", "checkout", isbn, &metadata, &dto);
        self.publish(event);
        true
    }
}
