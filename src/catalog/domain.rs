pub mod service;

use crate::books::domain::model::BookEntity;

// CatalogService owns the book collection. Lookups scan in catalog order and return the first match.
pub trait CatalogService {
    // Appends without checking the ISBN, callers look it up first.
    fn add_book(&mut self, book: BookEntity);
    fn remove_book(&mut self, isbn: &str) -> bool;
    fn get_all_books(&self) -> &[BookEntity];
    fn get_available_books(&self) -> Vec<&BookEntity>;
    fn find_book_by_isbn(&self, isbn: &str) -> Option<&BookEntity>;
    fn find_book_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut BookEntity>;
}
