pub mod service;

use crate::books::domain::model::BookEntity;
use crate::parties::domain::model::PatronEntity;

pub trait PatronService {
    // Always registers, callers check the id with `find_user_by_id` first.
    fn register_user(&mut self, name: &str, patron_id: &str) -> &PatronEntity;
    fn get_all_users(&self) -> &[PatronEntity];
    fn find_user_by_id(&self, patron_id: &str) -> Option<&PatronEntity>;
    // Resolves the patron's borrowed book ids, books removed since are skipped.
    fn borrowed_books_of(&self, patron_id: &str) -> Vec<&BookEntity>;
}
