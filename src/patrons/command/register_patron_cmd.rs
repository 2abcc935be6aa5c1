use serde::{Deserialize, Serialize};
use crate::core::command::{require_filled, Command, CommandError};
use crate::core::library::LibraryError;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct RegisterPatronCommand<'a> {
    patron_service: &'a mut dyn PatronService,
}

impl<'a> RegisterPatronCommand<'a> {
    pub fn new(patron_service: &'a mut dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterPatronCommandRequest {
    pub name: String,
    pub patron_id: String,
}

impl RegisterPatronCommandRequest {
    pub fn new(name: &str, patron_id: &str) -> Self {
        Self {
            name: name.to_string(),
            patron_id: patron_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RegisterPatronCommandResponse {
    pub patron: PatronDto,
}

impl RegisterPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

impl<'a> Command<RegisterPatronCommandRequest, RegisterPatronCommandResponse> for RegisterPatronCommand<'a> {
    fn execute(&mut self, req: RegisterPatronCommandRequest) -> Result<RegisterPatronCommandResponse, CommandError> {
        require_filled(&[("name", req.name.as_str()), ("patron_id", req.patron_id.as_str())])?;
        if self.patron_service.find_user_by_id(req.patron_id.as_str()).is_some() {
            return Err(CommandError::from(LibraryError::duplicate_key(
                format!("patron with id {} already exists", req.patron_id).as_str())));
        }
        let patron = self.patron_service.register_user(req.name.as_str(), req.patron_id.as_str());
        Ok(RegisterPatronCommandResponse::new(PatronDto::from(patron)))
    }
}
