use lms_cafe::cafe::domain::customer::{Customer, Employee};
use lms_cafe::cafe::domain::product::Product;
use lms_cafe::cafe::domain::promotion::Promotion;
use lms_cafe::cafe::shop::Cafe;
use lms_cafe::core::cafe::{CafeResult, EmployeeRole, OrderStatus};
use lms_cafe::core::domain::Configuration;
use lms_cafe::gateway::factory::create_publisher;
use lms_cafe::gateway::GatewayPublisherVia;
use lms_cafe::utils::logging::setup_tracing;

const BRANCH: &str = "centro";

fn main() -> CafeResult<()> {
    let config = Configuration::from_env(BRANCH);
    setup_tracing(config.json_logs);

    let mut cafe = Cafe::new(&config, create_publisher(GatewayPublisherVia::Logs));

    cafe.restock("café", 1000)?;
    cafe.restock("leche", 2000)?;
    cafe.restock("chocolate", 500)?;

    let mut latte = Product::beverage("Café Latte", 4.50, "Grande", true);
    latte.add_customization("leche de almendra")?;
    latte.add_customization("sin azúcar")?;
    let latte_id = cafe.add_product(latte);
    let brownie_id = cafe.add_product(Product::dessert("Brownie", 3.50, false, false));

    let customer_id = cafe.register_customer(Customer::new("María García", "87654321B"));
    cafe.hire_employee(Employee::new("Luis Torres", "22222222D", EmployeeRole::Barista));

    let promotion = Promotion::new("Descuento Fidelidad", 0.15, 10)?;

    match cafe.place_order(customer_id.as_str(), &[latte_id.as_str(), brownie_id.as_str()], Some(&promotion)) {
        Ok(order) => {
            println!("Pedido realizado con éxito. Total: ${:.2}", order.total);
            for product in order.products.iter() {
                println!("- {}", product.description());
            }
            cafe.update_order_status(order.order_id.as_str(), OrderStatus::Preparing)?;
            cafe.update_order_status(order.order_id.as_str(), OrderStatus::Delivered)?;
            println!("Estado del pedido: {}", OrderStatus::Delivered);
        }
        Err(err) => println!("Error al realizar el pedido: {}", err),
    }

    for (ingredient, quantity) in [("café", 1500), ("café", 200)] {
        match cafe.consume(ingredient, quantity) {
            Ok(()) => println!("Consumidos {} de {}; quedan {}.", quantity, ingredient, cafe.inventory().stock(ingredient)),
            Err(err) => println!("Error al consumir ingrediente: {}", err),
        }
    }
    Ok(())
}
