use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct GetPatronCommand<'a> {
    patron_service: &'a dyn PatronService,
}

impl<'a> GetPatronCommand<'a> {
    pub fn new(patron_service: &'a dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPatronCommandRequest {
    pub patron_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetPatronCommandResponse {
    pub patron: PatronDto,
    pub borrowed_books: Vec<BookDto>,
}

impl GetPatronCommandResponse {
    pub fn new(patron: PatronDto, borrowed_books: Vec<BookDto>) -> Self {
        Self {
            patron,
            borrowed_books,
        }
    }
}

impl<'a> Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand<'a> {
    fn execute(&mut self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        let patron = self.patron_service.find_user_by_id(req.patron_id.as_str())
            .ok_or_else(|| LibraryError::not_found(
                format!("patron with id {} not found", req.patron_id).as_str()))?;
        let borrowed_books = self.patron_service.borrowed_books_of(req.patron_id.as_str())
            .into_iter().map(BookDto::from).collect();
        Ok(GetPatronCommandResponse::new(PatronDto::from(patron), borrowed_books))
    }
}
