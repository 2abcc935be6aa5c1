use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, PartyKind};
use crate::parties::domain::{ActiveParty, Party, PartyService};
use crate::parties::dto::PartyDto;
use crate::patrons::domain::PatronService;

// LoginService is what signing in needs from the registry: both rosters and the session.
pub trait LoginService: PartyService + PatronService {}

impl<T: PartyService + PatronService> LoginService for T {}

pub struct LoginCommand<'a> {
    login_service: &'a mut dyn LoginService,
}

impl<'a> LoginCommand<'a> {
    pub fn new(login_service: &'a mut dyn LoginService) -> Self {
        Self {
            login_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginCommandRequest {
    pub kind: PartyKind,
    pub party_id: String,
}

impl LoginCommandRequest {
    pub fn new(kind: PartyKind, party_id: &str) -> Self {
        Self {
            kind,
            party_id: party_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct LoginCommandResponse {
    pub party: PartyDto,
}

impl LoginCommandResponse {
    pub fn new(party: PartyDto) -> Self {
        Self {
            party,
        }
    }
}

impl<'a> Command<LoginCommandRequest, LoginCommandResponse> for LoginCommand<'a> {
    fn execute(&mut self, req: LoginCommandRequest) -> Result<LoginCommandResponse, CommandError> {
        let party: Option<&dyn Party> = match req.kind {
            PartyKind::Librarian => self.login_service.find_librarian_by_id(req.party_id.as_str()).map(|l| l as &dyn Party),
            PartyKind::Patron => self.login_service.find_user_by_id(req.party_id.as_str()).map(|p| p as &dyn Party),
        };
        let party = party.ok_or_else(|| LibraryError::not_found(
            format!("{} with id {} not found", req.kind, req.party_id).as_str()))?;
        let dto = PartyDto::from(party);
        self.login_service.set_current_person(ActiveParty::new(dto.kind, dto.party_id.as_str()));
        Ok(LoginCommandResponse::new(dto))
    }
}
