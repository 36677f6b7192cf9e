use crate::core::domain::Identifiable;
use crate::core::library::MaterialStatus;

pub mod loan;
pub mod model;
pub mod patron;

// Lendable is anything the library can lend or reserve.
pub trait Lendable: Identifiable {
    fn title(&self) -> &str;
    fn status(&self) -> MaterialStatus;
    fn description(&self) -> String;
}
