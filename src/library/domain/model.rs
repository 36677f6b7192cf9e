use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, MaterialStatus};
use crate::library::domain::Lendable;
use crate::utils::date::{now, serializer};

// MaterialKind carries the attributes specific to each kind of material.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum MaterialKind {
    Book {
        author: String,
        genre: String,
    },
    Magazine {
        edition: String,
        periodicity: String,
    },
    Digital {
        file_type: String,
        url: String,
    },
}

// Material abstracts an item held by the library. The code is unique
// within a library and the status is only changed through `transition`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Material {
    pub code: String,
    pub title: String,
    status: MaterialStatus,
    pub kind: MaterialKind,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl Material {
    pub fn new(code: &str, title: &str, kind: MaterialKind) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            status: MaterialStatus::Available,
            kind,
            created_at: now(),
        }
    }

    pub fn book(code: &str, title: &str, author: &str, genre: &str) -> Self {
        Self::new(code, title, MaterialKind::Book {
            author: author.to_string(),
            genre: genre.to_string(),
        })
    }

    pub fn magazine(code: &str, title: &str, edition: &str, periodicity: &str) -> Self {
        Self::new(code, title, MaterialKind::Magazine {
            edition: edition.to_string(),
            periodicity: periodicity.to_string(),
        })
    }

    pub fn digital(code: &str, title: &str, file_type: &str, url: &str) -> Self {
        Self::new(code, title, MaterialKind::Digital {
            file_type: file_type.to_string(),
            url: url.to_string(),
        })
    }

    pub fn is_available(&self) -> bool {
        self.status == MaterialStatus::Available
    }

    // ensure_available fails with a validation error naming `purpose`
    pub fn ensure_available(&self, purpose: &str) -> LibraryResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            warn!(code = %self.code, status = %self.status, "material is not available for {}", purpose);
            Err(LibraryError::validation(
                format!("El material no está disponible para {}", purpose).as_str(),
                Some("400".to_string())))
        }
    }

    // transition moves to `next` if the status allows it; the status is unchanged on error
    pub fn transition(&mut self, next: MaterialStatus) -> LibraryResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(LibraryError::validation(
                format!("material {} cannot go from {} to {}", self.code, self.status, next).as_str(),
                Some("400".to_string())));
        }
        info!(code = %self.code, from = %self.status, to = %next, "material status changed");
        self.status = next;
        Ok(())
    }

    pub fn lend(&mut self) -> LibraryResult<()> {
        self.ensure_available("préstamo")?;
        self.transition(MaterialStatus::Loaned)
    }

    pub fn send_to_repair(&mut self) -> LibraryResult<()> {
        self.transition(MaterialStatus::UnderRepair)
    }

    // Always succeeds, whatever the current status.
    pub fn mark_available(&mut self) {
        self.status = MaterialStatus::Available;
    }
}

impl Identifiable for Material {
    fn id(&self) -> String {
        self.code.to_string()
    }
}

impl Lendable for Material {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> MaterialStatus {
        self.status
    }

    fn description(&self) -> String {
        match &self.kind {
            MaterialKind::Book { author, genre } => {
                format!("{} por {} ({})", self.title, author, genre)
            }
            MaterialKind::Magazine { edition, periodicity } => {
                format!("{} - Edición {} ({})", self.title, edition, periodicity)
            }
            MaterialKind::Digital { file_type, url } => {
                format!("{} ({}) - {}", self.title, file_type, url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, MaterialStatus};
    use crate::library::domain::Lendable;
    use crate::library::domain::model::Material;

    #[test]
    fn test_should_build_materials() {
        let book = Material::book("001", "Cien Años de Soledad", "Gabriel García Márquez", "Realismo Mágico");
        assert_eq!("001", book.code.as_str());
        assert_eq!(MaterialStatus::Available, book.status());
        assert!(book.is_available());
    }

    #[test]
    fn test_should_describe_book() {
        let book = Material::book("001", "Cien Años de Soledad", "Gabriel García Márquez", "Realismo Mágico");
        assert_eq!("Cien Años de Soledad por Gabriel García Márquez (Realismo Mágico)", book.description());
    }

    #[test]
    fn test_should_describe_magazine() {
        let magazine = Material::magazine("002", "National Geographic", "Marzo 2023", "Mensual");
        assert_eq!("National Geographic - Edición Marzo 2023 (Mensual)", magazine.description());
    }

    #[test]
    fn test_should_describe_digital() {
        let digital = Material::digital("003", "Curso de Python", "PDF", "http://example.com/curso-python");
        assert_eq!("Curso de Python (PDF) - http://example.com/curso-python", digital.description());
    }

    #[test]
    fn test_should_lend_available_material_once() {
        let mut book = Material::book("001", "t", "a", "g");
        book.lend().expect("should lend");
        assert_eq!(MaterialStatus::Loaned, book.status());
        let err = book.lend().expect_err("should not lend twice");
        assert!(matches!(err, LibraryError::Validation { .. }));
        assert_eq!(MaterialStatus::Loaned, book.status());
    }

    #[test]
    fn test_should_not_lend_material_under_repair() {
        let mut book = Material::book("001", "t", "a", "g");
        book.send_to_repair().expect("should send to repair");
        let err = book.lend().expect_err("should not lend");
        assert_eq!("El material no está disponible para préstamo", err.message());
        assert_eq!(MaterialStatus::UnderRepair, book.status());
    }

    #[test]
    fn test_should_reject_repeated_repair() {
        let mut book = Material::book("001", "t", "a", "g");
        book.send_to_repair().expect("should send to repair");
        assert!(book.send_to_repair().is_err());
        assert_eq!(MaterialStatus::UnderRepair, book.status());
    }

    #[test]
    fn test_should_mark_available_from_any_status() {
        let mut book = Material::book("001", "t", "a", "g");
        book.mark_available();
        assert_eq!(MaterialStatus::Available, book.status());
        book.lend().expect("should lend");
        book.mark_available();
        assert_eq!(MaterialStatus::Available, book.status());
        book.send_to_repair().expect("should send to repair");
        book.mark_available();
        assert_eq!(MaterialStatus::Available, book.status());
    }
}
