use core::fmt;

use crate::domain::contact::Contact;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Csv(csv::Error),
    Regex(regex::Error),
    AlreadyExists(Box<Contact>),
    CorruptStore(String),
    NotFound(String),
    ParseCommand(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "Could not read or write the contacts file: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::AlreadyExists(contact) => {
                write!(
                    f,
                    "Contact: {} {} is already saved!",
                    contact.first_name, contact.last_name
                )
            }
            AppError::CorruptStore(msg) => {
                write!(f, "Contacts file is corrupt: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Csv(e) => Some(e),
            AppError::Regex(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("Phone number must be 09 followed by 9 digits".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: Phone number must be 09 followed by 9 digits"
        );
    }

    #[test]
    fn already_exists_names_the_saved_contact() {
        let existing = Contact::new("Amin", "Khatoon Abadi", "09123456789", "", "");
        let err = AppError::AlreadyExists(Box::new(existing));

        assert_eq!(
            err.to_string(),
            "Contact: Amin Khatoon Abadi is already saved!"
        );
    }

    #[test]
    fn io_error_is_wrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();

        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }
}
