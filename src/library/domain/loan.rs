use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::library::domain::model::Material;
use crate::library::domain::Lendable;
use crate::parties::domain::Party;
use crate::utils::date::{now, serializer};

// Loan records a material lent to a patron until `due_at`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: String,
    pub patron_id: String,
    pub material_code: String,
    #[serde(with = "serializer")]
    pub loaned_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

impl Loan {
    pub fn new(patron: &dyn Party, material: &dyn Lendable, due_at: NaiveDateTime) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            patron_id: patron.id(),
            material_code: material.id(),
            loaned_at: now(),
            due_at,
        }
    }

    // return_material puts the material back on the shelf. Neither ownership
    // nor the current status is checked, so it can be called repeatedly.
    pub fn return_material(&self, material: &mut Material) {
        material.mark_available();
        info!(loan_id = %self.loan_id, code = %material.code, "material returned");
    }

    pub fn is_overdue(&self, at: NaiveDateTime) -> bool {
        at > self.due_at
    }
}

impl Identifiable for Loan {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

// Reservation records a patron's claim on an available material. It never
// changes the material status.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub patron_id: String,
    pub material_code: String,
    #[serde(with = "serializer")]
    pub reserved_at: NaiveDateTime,
}

impl Reservation {
    pub fn new(patron: &dyn Party, material: &dyn Lendable) -> Self {
        Self {
            reservation_id: Uuid::new_v4().to_string(),
            patron_id: patron.id(),
            material_code: material.id(),
            reserved_at: now(),
        }
    }
}

impl Identifiable for Reservation {
    fn id(&self) -> String {
        self.reservation_id.to_string()
    }
}
