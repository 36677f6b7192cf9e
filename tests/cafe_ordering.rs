use lms_cafe::cafe::domain::customer::Customer;
use lms_cafe::cafe::domain::product::Product;
use lms_cafe::cafe::domain::promotion::Promotion;
use lms_cafe::cafe::shop::Cafe;
use lms_cafe::core::cafe::{CafeError, OrderStatus};
use lms_cafe::core::domain::Configuration;
use lms_cafe::gateway::factory::create_publisher;
use lms_cafe::gateway::GatewayPublisherVia;

#[test]
fn test_should_run_ordering_walkthrough() {
    let mut cafe = Cafe::new(&Configuration::new("centro"), create_publisher(GatewayPublisherVia::Memory));
    cafe.restock("café", 1000).expect("restock");

    let mut latte = Product::beverage("Café Latte", 4.50, "Grande", true);
    latte.add_customization("leche de almendra").expect("customize");
    latte.add_customization("sin azúcar").expect("customize");
    let latte_id = cafe.add_product(latte);
    let brownie_id = cafe.add_product(Product::dessert("Brownie", 3.50, false, false));
    let maria = cafe.register_customer(Customer::new("María García", "87654321B"));
    let promotion = Promotion::new("Descuento Fidelidad", 0.15, 10).expect("promotion");

    let items = [latte_id.as_str(), brownie_id.as_str()];
    let mut totals = vec![];
    for _ in 0..6 {
        let order = cafe.place_order(maria.as_str(), &items, Some(&promotion)).expect("order");
        totals.push(order.total);
    }
    // points before each order: 0, 2, 4, 6, 8, 10
    for total in &totals[..5] {
        assert!((total - 8.0).abs() < 1e-9);
    }
    assert!((totals[5] - 6.8).abs() < 1e-9);
    assert_eq!(12, cafe.find_customer(maria.as_str()).expect("maria").loyalty_points);

    let order_id = cafe.orders()[0].order_id.to_string();
    cafe.update_order_status(order_id.as_str(), OrderStatus::Delivered).expect("delivered");
    cafe.update_order_status(order_id.as_str(), OrderStatus::Pending).expect("back to pending");
    assert_eq!(OrderStatus::Pending, cafe.find_order(order_id.as_str()).expect("order").status);

    assert_eq!(1000, cafe.inventory().stock("café"));
    assert!(matches!(cafe.consume("café", 1500), Err(CafeError::InsufficientStock { .. })));
    cafe.consume("café", 200).expect("consume");
    assert_eq!(800, cafe.inventory().stock("café"));

    assert_eq!(
        "Café Latte (Grande, caliente) con leche de almendra, sin azúcar",
        cafe.find_product(latte_id.as_str()).expect("latte").description());
}
