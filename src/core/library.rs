use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // A precondition on the material or patron did not hold, e.g. lending a
    // material that is not available.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::Serialization { message } => message,
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code: Some(code) } => {
                write!(f, "{} ({})", message, code)
            }
            LibraryError::Validation { message, reason_code: None } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the lending domain.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum MaterialStatus {
    #[default]
    Available,
    Loaned,
    UnderRepair,
}

impl MaterialStatus {
    // can_transition_to allows any status back to Available. Lending needs an
    // available material and repair cannot be entered twice.
    pub fn can_transition_to(&self, next: MaterialStatus) -> bool {
        match (self, next) {
            (_, MaterialStatus::Available) => true,
            (MaterialStatus::Available, MaterialStatus::Loaned) => true,
            (MaterialStatus::Available, MaterialStatus::UnderRepair) => true,
            (MaterialStatus::Loaned, MaterialStatus::UnderRepair) => true,
            _ => false,
        }
    }
}

impl From<String> for MaterialStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Disponible" => MaterialStatus::Available,
            "Prestado" => MaterialStatus::Loaned,
            "En Reparación" => MaterialStatus::UnderRepair,
            _ => MaterialStatus::Available,
        }
    }
}

impl Display for MaterialStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MaterialStatus::Available => write!(f, "Disponible"),
            MaterialStatus::Loaned => write!(f, "Prestado"),
            MaterialStatus::UnderRepair => write!(f, "En Reparación"),
        }
    }
}
