use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {
    #[serde(default)]
    pub available_only: bool,
}

impl ListBooksCommandRequest {
    pub fn all() -> Self {
        Self {
            available_only: false,
        }
    }

    pub fn available() -> Self {
        Self {
            available_only: true,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = if req.available_only {
            self.catalog_service.get_available_books().into_iter().map(BookDto::from).collect()
        } else {
            self.catalog_service.get_all_books().iter().map(BookDto::from).collect()
        };
        Ok(ListBooksCommandResponse::new(books))
    }
}
