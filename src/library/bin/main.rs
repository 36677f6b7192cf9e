use lms_cafe::core::domain::Configuration;
use lms_cafe::core::library::LibraryResult;
use lms_cafe::gateway::factory::create_publisher;
use lms_cafe::gateway::GatewayPublisherVia;
use lms_cafe::library::catalog::Library;
use lms_cafe::library::domain::model::Material;
use lms_cafe::library::domain::patron::Patron;
use lms_cafe::utils::date::{days_from_now, format_date};
use lms_cafe::utils::logging::setup_tracing;

const BRANCH: &str = "central";

fn main() -> LibraryResult<()> {
    let config = Configuration::from_env(BRANCH);
    setup_tracing(config.json_logs);

    let mut library = Library::new(&config, create_publisher(GatewayPublisherVia::Logs));

    library.add_material(Material::book("001", "Cien Años de Soledad", "Gabriel García Márquez", "Realismo Mágico"))?;
    library.add_material(Material::magazine("002", "National Geographic", "Marzo 2023", "Mensual"))?;
    library.add_material(Material::digital("003", "Curso de Python", "PDF", "http://example.com/curso-python"))?;

    let patron_id = library.register_patron(Patron::new("Juan Pérez", "12345678A"));

    let loan = match library.borrow(patron_id.as_str(), "001", days_from_now(config.loan_days)?) {
        Ok(loan) => {
            println!("Préstamo realizado con éxito. Devolución el {}.", format_date(&loan.due_at));
            Some(loan)
        }
        Err(err) => {
            println!("Error al realizar el préstamo: {}", err.message());
            None
        }
    };

    // the book is already out, so a second loan is refused
    if let Err(err) = library.borrow(patron_id.as_str(), "001", days_from_now(config.loan_days)?) {
        println!("Error al realizar el préstamo: {}", err.message());
    }

    match library.reserve(patron_id.as_str(), "002") {
        Ok(_) => println!("Reserva realizada con éxito."),
        Err(err) => println!("Error al realizar la reserva: {}", err.message()),
    }

    println!("Materiales en la biblioteca:");
    for description in library.list_materials() {
        println!("{}", description);
    }

    if let Some(loan) = loan {
        match library.return_loan(&loan) {
            Ok(()) => println!("Material {} devuelto.", loan.material_code),
            Err(err) => println!("Error al devolver el material: {}", err.message()),
        }
    }
    Ok(())
}
