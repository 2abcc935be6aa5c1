use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::patrons::domain::PatronService;

// LendingService is what a checkout needs from the registry.
pub trait LendingService: CatalogService + PatronService + CheckoutService {}

impl<T: CatalogService + PatronService + CheckoutService> LendingService for T {}

pub struct CheckoutBookCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> CheckoutBookCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    pub patron_id: String,
    pub isbn: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub book: BookDto,
    pub num_borrowed: usize,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto, num_borrowed: usize) -> Self {
        Self {
            book,
            num_borrowed,
        }
    }
}

impl<'a> Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand<'a> {
    fn execute(&mut self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        if self.lending_service.find_user_by_id(req.patron_id.as_str()).is_none() {
            return Err(CommandError::from(LibraryError::not_found(
                format!("patron with id {} not found", req.patron_id).as_str())));
        }
        let book = self.lending_service.find_book_by_isbn(req.isbn.as_str())
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", req.isbn).as_str()))?;
        if !book.is_available() {
            return Err(CommandError::from(LibraryError::validation(
                format!("book {} is already checked out", req.isbn).as_str(), Some("400".to_string()))));
        }
        if !self.lending_service.borrow_book(req.patron_id.as_str(), req.isbn.as_str()) {
            return Err(CommandError::from(LibraryError::runtime(
                format!("could not check out book {}", req.isbn).as_str(), None)));
        }
        let book = self.lending_service.find_book_by_isbn(req.isbn.as_str())
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", req.isbn).as_str()))?;
        let num_borrowed = self.lending_service.find_user_by_id(req.patron_id.as_str())
            .map(|p| p.borrowed_books().len())
            .unwrap_or_default();
        Ok(CheckoutBookCommandResponse::new(book, num_borrowed))
    }
}
