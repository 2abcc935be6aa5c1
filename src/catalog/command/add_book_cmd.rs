use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{require_filled, Command, CommandError};
use crate::core::library::LibraryError;

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }

    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str())
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        require_filled(&[("title", req.title.as_str()), ("author", req.author.as_str()), ("isbn", req.isbn.as_str())])?;
        if self.catalog_service.find_book_by_isbn(req.isbn.as_str()).is_some() {
            return Err(CommandError::from(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", req.isbn).as_str())));
        }
        let book = req.build_book();
        let dto = BookDto::from(&book);
        self.catalog_service.add_book(book);
        Ok(AddBookCommandResponse::new(dto))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_add_book() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        let res = AddBookCommand::new(&mut system)
            .execute(AddBookCommandRequest::new("Dead Souls", "Nikolai Gogol", "9785171183772"))
            .expect("should add book");
        assert_eq!("Available", res.book.status_label.as_str());
        assert_eq!(4, system.get_all_books().len());
        assert_eq!("9785171183772", system.get_all_books()[3].isbn());
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        let res = AddBookCommand::new(&mut system)
            .execute(AddBookCommandRequest::new("Another Master", "Someone", "9785170906440"));
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
        assert_eq!(3, system.get_all_books().len());
    }

    #[test]
    fn test_should_reject_blank_fields() {
        let mut system = factory::create_library_system(&Configuration::new("test"));
        let mut cmd = AddBookCommand::new(&mut system);
        for req in [AddBookCommandRequest::new("", "Nikolai Gogol", "9785171183772"),
            AddBookCommandRequest::new("Dead Souls", " ", "9785171183772"),
            AddBookCommandRequest::new("Dead Souls", "Nikolai Gogol", "")] {
            assert!(matches!(cmd.execute(req), Err(CommandError::Validation { .. })));
        }
        assert_eq!(3, system.get_all_books().len());
    }
}
