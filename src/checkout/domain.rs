pub mod service;

// CheckoutService lends catalog books to registered patrons.
pub trait CheckoutService {
    /// Lends the book with `isbn` to the patron with `patron_id`. Returns false when either
    /// record is unknown or the book is already checked out.
    fn borrow_book(&mut self, patron_id: &str, isbn: &str) -> bool;
}
