use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::library::domain::loan::{Loan, Reservation};
use crate::library::domain::model::Material;
use crate::parties::domain::model::{PartyKind, Person};
use crate::parties::domain::Party;

// Patron abstracts library member along with the loans and reservations
// the patron has made.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Patron {
    pub person: Person,
    pub loans: Vec<Loan>,
    pub reservations: Vec<Reservation>,
}

impl Patron {
    pub fn new(name: &str, national_id: &str) -> Self {
        Self {
            person: Person::new(name, national_id),
            loans: vec![],
            reservations: vec![],
        }
    }

    // borrow lends an available material until `due_at` and records the loan
    pub fn borrow(&mut self, material: &mut Material, due_at: NaiveDateTime) -> LibraryResult<Loan> {
        material.ensure_available("préstamo")?;
        let loan = Loan::new(&*self, &*material, due_at);
        material.lend()?;
        self.loans.push(loan.clone());
        info!(patron_id = %self.person.person_id, code = %material.code, loan_id = %loan.loan_id, "material loaned");
        Ok(loan)
    }

    // reserve records a reservation, leaving the material status as it is
    pub fn reserve(&mut self, material: &Material) -> LibraryResult<Reservation> {
        material.ensure_available("reserva")?;
        let reservation = Reservation::new(&*self, material);
        self.reservations.push(reservation.clone());
        info!(patron_id = %self.person.person_id, code = %material.code,
            reservation_id = %reservation.reservation_id, "material reserved");
        Ok(reservation)
    }
}

impl Identifiable for Patron {
    fn id(&self) -> String {
        self.person.person_id.to_string()
    }
}

impl Party for Patron {
    fn name(&self) -> &str {
        self.person.name.as_str()
    }

    fn national_id(&self) -> &str {
        self.person.national_id.as_str()
    }

    fn kind(&self) -> PartyKind {
        PartyKind::Patron
    }
}
