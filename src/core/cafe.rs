use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum CafeError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // Raised by the inventory when a consumption exceeds the stock on hand.
    InsufficientStock {
        ingredient: String,
        requested: u32,
        available: u32,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl CafeError {
    pub fn validation(message: &str, reason_code: Option<String>) -> CafeError {
        CafeError::Validation { message: message.to_string(), reason_code }
    }

    pub fn insufficient_stock(ingredient: &str, requested: u32, available: u32) -> CafeError {
        CafeError::InsufficientStock { ingredient: ingredient.to_string(), requested, available }
    }

    pub fn not_found(message: &str) -> CafeError {
        CafeError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> CafeError {
        CafeError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for CafeError {
    fn from(err: serde_json::Error) -> Self {
        CafeError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CafeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CafeError::Validation { message, reason_code: Some(code) } => {
                write!(f, "{} ({})", message, code)
            }
            CafeError::Validation { message, reason_code: None } => {
                write!(f, "{}", message)
            }
            CafeError::InsufficientStock { ingredient, .. } => {
                write!(f, "No hay suficiente stock de {}", ingredient)
            }
            CafeError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CafeError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CafeError {}

/// A specialized Result type for the café domain.
pub type CafeResult<T> = Result<T, CafeError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Delivered,
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pendiente" => OrderStatus::Pending,
            "En Preparación" => OrderStatus::Preparing,
            "Entregado" => OrderStatus::Delivered,
            _ => OrderStatus::Pending,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pendiente"),
            OrderStatus::Preparing => write!(f, "En Preparación"),
            OrderStatus::Delivered => write!(f, "Entregado"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EmployeeRole {
    Waiter,
    Barista,
    Manager,
}

impl From<String> for EmployeeRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Mesero" => EmployeeRole::Waiter,
            "Barista" => EmployeeRole::Barista,
            "Gerente" => EmployeeRole::Manager,
            _ => EmployeeRole::Waiter,
        }
    }
}

impl Display for EmployeeRole {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            EmployeeRole::Waiter => write!(f, "Mesero"),
            EmployeeRole::Barista => write!(f, "Barista"),
            EmployeeRole::Manager => write!(f, "Gerente"),
        }
    }
}
