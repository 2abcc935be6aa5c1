use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts a single catalog item. The catalog looks books up by ISBN, while
// `book_id` tells apart records that carried the same ISBN at different times. The identity
// fields are fixed at creation, only the availability state changes through borrow and return.
#[derive(Debug, PartialEq, Clone)]
pub struct BookEntity {
    book_id: String,
    title: String,
    author: String,
    isbn: String,
    available: bool,
    borrowed_at: Option<NaiveDateTime>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available: true,
            borrowed_at: None,
        }
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Time of the last successful borrow, present only while the book is checked out.
    pub fn borrowed_at(&self) -> Option<NaiveDateTime> {
        self.borrowed_at
    }

    /// Marks the book as checked out. Returns false and leaves the book untouched
    /// when it is already checked out.
    pub fn borrow(&mut self) -> bool {
        if !self.available {
            return false;
        }
        self.available = false;
        self.borrowed_at = Some(Utc::now().naive_utc());
        true
    }

    pub fn return_book(&mut self) {
        self.available = true;
        self.borrowed_at = None;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.available
    }
}
