use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::optional_serializer;

// BookDto is a read-only snapshot of a catalog item handed to the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    pub status_label: String,
    #[serde(with = "optional_serializer")]
    pub borrowed_at: Option<NaiveDateTime>,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id().to_string(),
            isbn: other.isbn().to_string(),
            title: other.title().to_string(),
            author: other.author().to_string(),
            book_status: other.status(),
            status_label: other.status().label().to_string(),
            borrowed_at: other.borrowed_at(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
    fn is_available(&self) -> bool {
        self.book_status == BookStatus::Available
    }
}
