pub mod command {
    pub mod checkout_book_cmd;
}
pub mod domain;
