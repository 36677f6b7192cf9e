use tracing::{info, warn};
use crate::cafe::domain::customer::{Customer, Employee};
use crate::cafe::domain::order::Order;
use crate::cafe::domain::product::Product;
use crate::cafe::domain::promotion::Promotion;
use crate::cafe::inventory::Inventory;
use crate::core::cafe::{CafeError, CafeResult, OrderStatus};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// Cafe holds the menu, the people and the stock ledger of one café together
// with every order placed so far. Ordering and the stock ledger are
// independent: placing an order never consumes ingredients. Events are
// published after the change they describe is applied, and a publish failure
// does not roll that change back.
#[derive(Debug)]
pub struct Cafe {
    branch_id: String,
    menu: Vec<Product>,
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    orders: Vec<Order>,
    inventory: Inventory,
    events_publisher: Box<dyn EventPublisher>,
}

impl Cafe {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            menu: vec![],
            customers: vec![],
            employees: vec![],
            orders: vec![],
            inventory: Inventory::new(),
            events_publisher,
        }
    }

    pub fn branch_id(&self) -> &str {
        self.branch_id.as_str()
    }

    // add_product returns the id of the product on the menu
    pub fn add_product(&mut self, product: Product) -> String {
        let product_id = product.id();
        info!(branch_id = %self.branch_id, product_id = %product_id, name = %product.name, "adding product");
        self.menu.push(product);
        product_id
    }

    pub fn register_customer(&mut self, customer: Customer) -> String {
        let customer_id = customer.id();
        info!(branch_id = %self.branch_id, customer_id = %customer_id, "registering customer");
        self.customers.push(customer);
        customer_id
    }

    pub fn hire_employee(&mut self, employee: Employee) -> String {
        let employee_id = employee.id();
        info!(branch_id = %self.branch_id, employee_id = %employee_id, role = %employee.role, "hiring employee");
        self.employees.push(employee);
        employee_id
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // menu describes every product on the menu, in the order they were added
    pub fn menu(&self) -> Vec<String> {
        self.menu.iter().map(|p| p.description()).collect()
    }

    pub fn find_product(&self, product_id: &str) -> CafeResult<&Product> {
        self.menu.iter().find(|p| p.product_id == product_id)
            .ok_or_else(|| CafeError::not_found(format!("product with id {} not found", product_id).as_str()))
    }

    pub fn find_customer(&self, customer_id: &str) -> CafeResult<&Customer> {
        self.customers.iter().find(|c| c.person.person_id == customer_id)
            .ok_or_else(|| CafeError::not_found(format!("customer with id {} not found", customer_id).as_str()))
    }

    pub fn find_order(&self, order_id: &str) -> CafeResult<&Order> {
        self.orders.iter().find(|o| o.order_id == order_id)
            .ok_or_else(|| CafeError::not_found(format!("order with id {} not found", order_id).as_str()))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn place_order(&mut self, customer_id: &str, product_ids: &[&str],
                       promotion: Option<&Promotion>) -> CafeResult<Order> {
        let products = product_ids.iter()
            .map(|id| self.find_product(id).cloned())
            .collect::<CafeResult<Vec<Product>>>()
            .map_err(|err| {
                warn!(customer_id = %customer_id, "order rejected: {}", err);
                err
            })?;
        let customer = self.customers.iter_mut().find(|c| c.person.person_id == customer_id)
            .ok_or_else(|| CafeError::not_found(format!("customer with id {} not found", customer_id).as_str()))?;
        let order = customer.place_order(products, promotion);
        // the café's records and the customer's history must agree
        self.orders.push(order.clone());
        self.events_publisher.publish(&DomainEvent::added(
            "order_placed", "orders", order.order_id.as_str(), &order)?)?;
        Ok(order)
    }

    // update_order_status overwrites the status of a placed order, in the
    // café's records and in the customer's history
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> CafeResult<()> {
        let order = self.orders.iter_mut().find(|o| o.order_id == order_id)
            .ok_or_else(|| CafeError::not_found(format!("order with id {} not found", order_id).as_str()))?;
        order.update_status(status);
        let customer_id = order.customer_id.to_string();
        if let Some(customer) = self.customers.iter_mut().find(|c| c.person.person_id == customer_id) {
            if let Some(entry) = customer.orders.iter_mut().find(|o| o.order_id == order_id) {
                entry.status = status;
            }
        }
        self.events_publisher.publish(&DomainEvent::updated(
            "order_status_updated", "orders", order_id, &status)?)?;
        Ok(())
    }

    pub fn restock(&mut self, ingredient: &str, quantity: u32) -> CafeResult<()> {
        self.inventory.restock(ingredient, quantity);
        self.events_publisher.publish(&DomainEvent::updated(
            "ingredient_restocked", "inventory", ingredient, &self.inventory.stock(ingredient))?)?;
        Ok(())
    }

    pub fn consume(&mut self, ingredient: &str, quantity: u32) -> CafeResult<()> {
        self.inventory.consume(ingredient, quantity)?;
        self.events_publisher.publish(&DomainEvent::updated(
            "ingredient_consumed", "inventory", ingredient, &self.inventory.stock(ingredient))?)?;
        Ok(())
    }

    pub fn published_events(&self) -> Vec<DomainEvent> {
        self.events_publisher.published()
    }
}

#[cfg(test)]
mod tests {
    use crate::cafe::domain::customer::{Customer, Employee};
    use crate::cafe::domain::product::Product;
    use crate::cafe::domain::promotion::Promotion;
    use crate::cafe::shop::Cafe;
    use crate::core::cafe::{CafeError, EmployeeRole, OrderStatus};
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    // RejectingPublisher refuses events with the given name
    #[derive(Debug)]
    struct RejectingPublisher {
        name: &'static str,
    }

    impl EventPublisher for RejectingPublisher {
        fn publish(&self, event: &DomainEvent) -> serde_json::Result<()> {
            if event.name == self.name {
                return serde_json::from_str::<u32>("rejected").map(|_| ());
            }
            Ok(())
        }
    }

    fn build_cafe() -> (Cafe, String, Vec<String>) {
        build_cafe_with(create_publisher(GatewayPublisherVia::Memory))
    }

    fn build_cafe_with(publisher: Box<dyn EventPublisher>) -> (Cafe, String, Vec<String>) {
        let mut cafe = Cafe::new(&Configuration::new("test"), publisher);
        let mut latte = Product::beverage("Café Latte", 4.50, "Grande", true);
        latte.add_customization("leche de almendra").expect("customize");
        let latte_id = cafe.add_product(latte);
        let brownie_id = cafe.add_product(Product::dessert("Brownie", 3.50, false, false));
        let customer_id = cafe.register_customer(Customer::new("María García", "87654321B"));
        (cafe, customer_id, vec![latte_id, brownie_id])
    }

    #[test]
    fn test_should_list_menu() {
        let (cafe, _, _) = build_cafe();
        assert_eq!(vec![
            "Café Latte (Grande, caliente) con leche de almendra".to_string(),
            "Brownie".to_string(),
        ], cafe.menu());
    }

    #[test]
    fn test_should_place_order_and_earn_points() {
        let (mut cafe, customer_id, ids) = build_cafe();
        let promotion = Promotion::new("Descuento Fidelidad", 0.15, 10).expect("valid promotion");
        let order = cafe.place_order(customer_id.as_str(), &[ids[0].as_str(), ids[1].as_str()], Some(&promotion))
            .expect("should place order");
        assert!((order.total - 8.0).abs() < 1e-9);
        assert_eq!(2, cafe.find_customer(customer_id.as_str()).expect("customer").loyalty_points);
        assert_eq!(1, cafe.orders().len());
    }

    #[test]
    fn test_should_not_touch_inventory_when_ordering() {
        let (mut cafe, customer_id, ids) = build_cafe();
        cafe.restock("café", 1000).expect("restock");
        cafe.place_order(customer_id.as_str(), &[ids[0].as_str()], None).expect("should place order");
        assert_eq!(1000, cafe.inventory().stock("café"));
        let (mut empty, customer_id, ids) = build_cafe();
        empty.place_order(customer_id.as_str(), &[ids[0].as_str()], None).expect("ordering ignores stock");
    }

    #[test]
    fn test_should_reject_unknown_ids() {
        let (mut cafe, customer_id, ids) = build_cafe();
        assert!(matches!(cafe.place_order(customer_id.as_str(), &["nope"], None), Err(CafeError::NotFound { .. })));
        assert!(matches!(cafe.place_order("nobody", &[ids[0].as_str()], None), Err(CafeError::NotFound { .. })));
        assert!(matches!(cafe.update_order_status("nope", OrderStatus::Delivered), Err(CafeError::NotFound { .. })));
        assert_eq!(0, cafe.find_customer(customer_id.as_str()).expect("customer").loyalty_points);
    }

    #[test]
    fn test_should_update_order_status_everywhere() {
        let (mut cafe, customer_id, ids) = build_cafe();
        let order = cafe.place_order(customer_id.as_str(), &[ids[1].as_str()], None).expect("should place order");
        cafe.update_order_status(order.order_id.as_str(), OrderStatus::Delivered).expect("should update");
        cafe.update_order_status(order.order_id.as_str(), OrderStatus::Preparing).expect("should update");
        assert_eq!(OrderStatus::Preparing, cafe.find_order(order.order_id.as_str()).expect("order").status);
        let customer = cafe.find_customer(customer_id.as_str()).expect("customer");
        assert_eq!(OrderStatus::Preparing, customer.orders[0].status);
    }

    #[test]
    fn test_should_consume_stock() {
        let (mut cafe, _, _) = build_cafe();
        cafe.restock("café", 1000).expect("restock");
        assert!(matches!(cafe.consume("café", 1500), Err(CafeError::InsufficientStock { .. })));
        assert_eq!(1000, cafe.inventory().stock("café"));
        cafe.consume("café", 200).expect("consume");
        assert_eq!(800, cafe.inventory().stock("café"));
    }

    #[test]
    fn test_should_hire_employees_and_publish_events() {
        let (mut cafe, customer_id, ids) = build_cafe();
        cafe.hire_employee(Employee::new("Luis Torres", "22222222D", EmployeeRole::Barista));
        assert_eq!(1, cafe.employees().len());
        cafe.place_order(customer_id.as_str(), &[ids[0].as_str()], None).expect("should place order");
        let names: Vec<String> = cafe.published_events().iter().map(|e| e.name.to_string()).collect();
        assert_eq!(vec!["order_placed"], names);
    }

    #[test]
    fn test_should_record_order_everywhere_when_publish_fails() {
        let (mut cafe, customer_id, ids) = build_cafe_with(Box::new(RejectingPublisher { name: "order_placed" }));
        let err = cafe.place_order(customer_id.as_str(), &[ids[1].as_str()], None).expect_err("publish fails");
        assert!(matches!(err, CafeError::Serialization { .. }));
        let customer = cafe.find_customer(customer_id.as_str()).expect("customer");
        assert_eq!(1, customer.orders.len());
        assert_eq!(1, cafe.orders().len());
        assert_eq!(customer.orders[0].order_id, cafe.orders()[0].order_id);
        assert_eq!(1, customer.loyalty_points);
    }
}
