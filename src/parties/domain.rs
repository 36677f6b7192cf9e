use crate::core::domain::Identifiable;
use crate::parties::domain::model::PartyKind;

pub mod model;

// Party is the behavior shared by every person known to the library or the café.
pub trait Party: Identifiable {
    fn name(&self) -> &str;
    fn national_id(&self) -> &str;
    fn kind(&self) -> PartyKind;
}
