use chrono::NaiveDateTime;
use tracing::{info, warn};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::library::domain::Lendable;
use crate::library::domain::loan::{Loan, Reservation};
use crate::library::domain::model::Material;
use crate::library::domain::patron::Patron;
use crate::utils::date::days_from_now;

// Library is the registry of materials and patrons for one branch. Both lists
// are append-only; the library owns every material a loan refers to.
// Events are published after the change they describe is applied. A publish
// failure is returned to the caller but does not roll that change back.
#[derive(Debug)]
pub struct Library {
    branch_id: String,
    loan_days: i64,
    materials: Vec<Material>,
    patrons: Vec<Patron>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            loan_days: config.loan_days,
            materials: vec![],
            patrons: vec![],
            events_publisher,
        }
    }

    pub fn branch_id(&self) -> &str {
        self.branch_id.as_str()
    }

    pub fn add_material(&mut self, material: Material) -> LibraryResult<()> {
        info!(branch_id = %self.branch_id, code = %material.code, "adding material");
        self.events_publisher.publish(&DomainEvent::added(
            "material_added", "materials", material.code.as_str(), &material)?)?;
        self.materials.push(material);
        Ok(())
    }

    // register_patron returns the id the patron is known by in this library
    pub fn register_patron(&mut self, patron: Patron) -> String {
        let patron_id = patron.id();
        info!(branch_id = %self.branch_id, patron_id = %patron_id, "registering patron");
        self.patrons.push(patron);
        patron_id
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    // list_materials describes every material, in the order they were added
    pub fn list_materials(&self) -> Vec<String> {
        self.materials.iter().map(|m| m.description()).collect()
    }

    pub fn find_material(&self, code: &str) -> LibraryResult<&Material> {
        self.materials.iter().find(|m| m.code == code)
            .ok_or_else(|| LibraryError::not_found(format!("material with code {} not found", code).as_str()))
    }

    pub fn find_patron(&self, patron_id: &str) -> LibraryResult<&Patron> {
        self.patrons.iter().find(|p| p.person.person_id == patron_id)
            .ok_or_else(|| LibraryError::not_found(format!("patron with id {} not found", patron_id).as_str()))
    }

    fn material_index(&self, code: &str) -> LibraryResult<usize> {
        self.materials.iter().position(|m| m.code == code)
            .ok_or_else(|| LibraryError::not_found(format!("material with code {} not found", code).as_str()))
    }

    fn patron_index(&self, patron_id: &str) -> LibraryResult<usize> {
        self.patrons.iter().position(|p| p.person.person_id == patron_id)
            .ok_or_else(|| LibraryError::not_found(format!("patron with id {} not found", patron_id).as_str()))
    }

    pub fn borrow(&mut self, patron_id: &str, code: &str, due_at: NaiveDateTime) -> LibraryResult<Loan> {
        let patron_ndx = self.patron_index(patron_id)?;
        let material_ndx = self.material_index(code)?;
        let loan = self.patrons[patron_ndx].borrow(&mut self.materials[material_ndx], due_at)
            .map_err(|err| {
                warn!(patron_id = %patron_id, code = %code, "loan rejected: {}", err);
                err
            })?;
        self.events_publisher.publish(&DomainEvent::added(
            "material_loaned", "loans", loan.loan_id.as_str(), &loan)?)?;
        Ok(loan)
    }

    // borrow_for_term lends the material for the branch's configured loan period
    pub fn borrow_for_term(&mut self, patron_id: &str, code: &str) -> LibraryResult<Loan> {
        let due_at = days_from_now(self.loan_days)?;
        self.borrow(patron_id, code, due_at)
    }

    pub fn reserve(&mut self, patron_id: &str, code: &str) -> LibraryResult<Reservation> {
        let patron_ndx = self.patron_index(patron_id)?;
        let material_ndx = self.material_index(code)?;
        let reservation = self.patrons[patron_ndx].reserve(&self.materials[material_ndx])
            .map_err(|err| {
                warn!(patron_id = %patron_id, code = %code, "reservation rejected: {}", err);
                err
            })?;
        self.events_publisher.publish(&DomainEvent::added(
            "material_reserved", "reservations", reservation.reservation_id.as_str(), &reservation)?)?;
        Ok(reservation)
    }

    // return_loan makes the loaned material available again. Any holder of the
    // loan record may return it, any number of times.
    pub fn return_loan(&mut self, loan: &Loan) -> LibraryResult<()> {
        let material_ndx = self.material_index(loan.material_code.as_str())?;
        let material = &mut self.materials[material_ndx];
        loan.return_material(material);
        self.events_publisher.publish(&DomainEvent::updated(
            "material_returned", "loans", loan.loan_id.as_str(), &material.status())?)?;
        Ok(())
    }

    pub fn send_to_repair(&mut self, code: &str) -> LibraryResult<()> {
        let material_ndx = self.material_index(code)?;
        let material = &mut self.materials[material_ndx];
        material.send_to_repair()?;
        self.events_publisher.publish(&DomainEvent::updated(
            "material_under_repair", "materials", code, &material.status())?)?;
        Ok(())
    }

    pub fn published_events(&self) -> Vec<DomainEvent> {
        self.events_publisher.published()
    }
}
