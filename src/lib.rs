//! Catalog, roster and lending rules of a small library desk. A shell drives the registry
//! directly or through the commands, this crate never prompts or prints.

pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
    pub mod library;
}

pub mod books {
    pub mod domain;
    pub mod dto;
}

pub mod parties {
    pub mod command {
        pub mod login_cmd;
    }
    pub mod domain;
    pub mod dto;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod get_book_cmd;
        pub mod list_books_cmd;
        pub mod remove_book_cmd;
    }
    pub mod domain;
    pub mod factory;
}

pub mod patrons;
pub mod checkout;
pub mod gateway;

pub mod utils {
    pub mod date;
    pub mod logs;
}
