use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn is_available(&self) -> bool;

    fn status(&self) -> BookStatus {
        BookStatus::from_availability(self.is_available())
    }
}
