use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::{now, serializer};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PartyKind {
    Patron,
    Customer,
    Employee,
}

impl Display for PartyKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PartyKind::Patron => write!(f, "Patron"),
            PartyKind::Customer => write!(f, "Customer"),
            PartyKind::Employee => write!(f, "Employee"),
        }
    }
}

// Person holds the identity every patron, customer and employee carries:
// a display name and the national identity document number.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Person {
    pub person_id: String,
    pub name: String,
    pub national_id: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl Person {
    pub fn new(name: &str, national_id: &str) -> Self {
        Self {
            person_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            national_id: national_id.to_string(),
            created_at: now(),
        }
    }
}
