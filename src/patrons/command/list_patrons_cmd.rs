use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct ListPatronsCommand<'a> {
    patron_service: &'a dyn PatronService,
}

impl<'a> ListPatronsCommand<'a> {
    pub fn new(patron_service: &'a dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPatronsCommandRequest {}


#[derive(Debug, Serialize)]
pub struct ListPatronsCommandResponse {
    pub patrons: Vec<PatronDto>,
}

impl ListPatronsCommandResponse {
    pub fn new(patrons: Vec<PatronDto>) -> Self {
        Self {
            patrons,
        }
    }
}

impl<'a> Command<ListPatronsCommandRequest, ListPatronsCommandResponse> for ListPatronsCommand<'a> {
    fn execute(&mut self, _req: ListPatronsCommandRequest) -> Result<ListPatronsCommandResponse, CommandError> {
        Ok(ListPatronsCommandResponse::new(
            self.patron_service.get_all_users().iter().map(PatronDto::from).collect()))
    }
}
