use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

// Command runs one library workflow step on behalf of the shell. Commands never prompt or print.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

// require_filled rejects blank input fields the way the desk rejects incomplete forms.
pub(crate) fn require_filled(fields: &[(&str, &str)]) -> Result<(), CommandError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(CommandError::from(LibraryError::validation(
                format!("{} must not be empty", name).as_str(), Some("400".to_string()))));
        }
    }
    Ok(())
}
