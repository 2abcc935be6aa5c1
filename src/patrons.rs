pub mod command {
    pub mod get_patron_cmd;
    pub mod list_patrons_cmd;
    pub mod register_patron_cmd;
}
pub mod domain;
pub mod dto;
