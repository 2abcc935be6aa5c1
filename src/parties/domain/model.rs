use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::PartyKind;
use crate::parties::domain::Party;

pub const PATRON_MENU: [&str; 3] = [
    "View available books",
    "Borrow a book",
    "Back to main menu",
];

pub const LIBRARIAN_MENU: [&str; 6] = [
    "Add a new book",
    "Remove a book from the system",
    "Register a new user",
    "View all users",
    "View all books",
    "Back to main menu",
];

// PatronEntity is a registered reader. Borrowed books stay owned by the catalog,
// the patron only keeps their book ids in borrow order.
#[derive(Debug, PartialEq, Clone)]
pub struct PatronEntity {
    name: String,
    patron_id: String,
    borrowed_book_ids: Vec<String>,
}

impl PatronEntity {
    pub fn new(name: &str, patron_id: &str) -> Self {
        Self {
            name: name.to_string(),
            patron_id: patron_id.to_string(),
            borrowed_book_ids: vec![],
        }
    }

    /// Checks the book out to this patron. The book's own transition is only attempted
    /// when it reports available, and the book id is recorded only if that transition succeeds.
    pub fn borrow_book(&mut self, book: &mut BookEntity) -> bool {
        if !book.is_available() {
            return false;
        }
        if !book.borrow() {
            return false;
        }
        self.borrowed_book_ids.push(book.book_id().to_string());
        true
    }

    pub fn borrowed_books(&self) -> &[String] {
        &self.borrowed_book_ids
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Party for PatronEntity {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PartyKind {
        PartyKind::Patron
    }

    fn menu_options(&self) -> &'static [&'static str] {
        &PATRON_MENU
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct LibrarianEntity {
    name: String,
    librarian_id: String,
}

impl LibrarianEntity {
    pub fn new(name: &str, librarian_id: &str) -> Self {
        Self {
            name: name.to_string(),
            librarian_id: librarian_id.to_string(),
        }
    }
}

impl Identifiable for LibrarianEntity {
    fn id(&self) -> String {
        self.librarian_id.to_string()
    }
}

impl Party for LibrarianEntity {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PartyKind {
        PartyKind::Librarian
    }

    fn menu_options(&self) -> &'static [&'static str] {
        &LIBRARIAN_MENU
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;
    use crate::core::library::PartyKind;
    use crate::parties::domain::Party;
    use crate::parties::domain::model::{LibrarianEntity, PatronEntity};

    #[test]
    fn test_should_build_patron() {
        let patron = PatronEntity::new("Ivan Petrov", "U001");
        assert_eq!("Ivan Petrov", patron.name());
        assert_eq!("U001", patron.id().as_str());
        assert_eq!(PartyKind::Patron, patron.kind());
        assert!(patron.borrowed_books().is_empty());
    }

    #[test]
    fn test_should_list_menu_options() {
        let patron = PatronEntity::new("Ivan Petrov", "U001");
        let librarian = LibrarianEntity::new("Anna Ivanova", "L001");
        assert_eq!(vec!["View available books", "Borrow a book", "Back to main menu"],
                   patron.menu_options().to_vec());
        assert_eq!(6, librarian.menu_options().len());
        assert_eq!("Add a new book", librarian.menu_options()[0]);
        assert_eq!("Back to main menu", librarian.menu_options()[5]);
    }

    #[test]
    fn test_should_borrow_available_book() {
        let mut patron = PatronEntity::new("Ivan Petrov", "U001");
        let mut book = BookEntity::new("The Master and Margarita", "Mikhail Bulgakov", "9785170906440");
        assert!(patron.borrow_book(&mut book));
        assert!(!book.is_available());
        assert_eq!(vec![book.book_id().to_string()], patron.borrowed_books().to_vec());
    }

    #[test]
    fn test_should_not_borrow_checked_out_book() {
        let mut patron = PatronEntity::new("Ivan Petrov", "U001");
        let mut book = BookEntity::new("The Master and Margarita", "Mikhail Bulgakov", "9785170906440");
        assert!(book.borrow());
        let borrowed_at = book.borrowed_at();
        assert!(!patron.borrow_book(&mut book));
        assert!(patron.borrowed_books().is_empty());
        assert!(!book.is_available());
        assert_eq!(borrowed_at, book.borrowed_at());
    }

    #[test]
    fn test_should_not_borrow_twice() {
        let mut first = PatronEntity::new("Ivan Petrov", "U001");
        let mut second = PatronEntity::new("Maria Sidorova", "U002");
        let mut book = BookEntity::new("1984", "George Orwell", "9785170908338");
        assert!(first.borrow_book(&mut book));
        assert!(!second.borrow_book(&mut book));
        assert!(!first.borrow_book(&mut book));
        assert_eq!(1, first.borrowed_books().len());
        assert!(second.borrowed_books().is_empty());
    }

    #[test]
    fn test_should_build_librarian() {
        let librarian = LibrarianEntity::new("Anna Ivanova", "L001");
        assert_eq!("Anna Ivanova", librarian.name());
        assert_eq!("L001", librarian.id().as_str());
        assert!(librarian.is_librarian());
    }
}
