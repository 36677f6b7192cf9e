use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use crate::cafe::domain::customer::Customer;
use crate::cafe::domain::product::Product;
use crate::cafe::domain::promotion::Promotion;
use crate::core::cafe::OrderStatus;
use crate::core::domain::Identifiable;
use crate::utils::date::{now, serializer};

// Order records the products a customer asked for. The total is fixed when
// the order is built.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub products: Vec<Product>,
    pub promotion: Option<Promotion>,
    pub status: OrderStatus,
    #[serde(with = "serializer")]
    pub placed_at: NaiveDateTime,
    pub total: f64,
}

impl Order {
    pub fn new(customer: &Customer, products: Vec<Product>, promotion: Option<&Promotion>) -> Self {
        let total = calculate_total(customer, &products, promotion);
        Self {
            order_id: Uuid::new_v4().to_string(),
            customer_id: customer.id(),
            products,
            promotion: promotion.cloned(),
            status: OrderStatus::Pending,
            placed_at: now(),
            total,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    pub fn discounted(&self) -> bool {
        self.total < self.subtotal()
    }

    // Any status may follow any other.
    pub fn update_status(&mut self, status: OrderStatus) {
        info!(order_id = %self.order_id, from = %self.status, to = %status, "order status updated");
        self.status = status;
    }
}

// calculate_total sums the prices, discounted when the customer's current
// points reach the promotion threshold
pub fn calculate_total(customer: &Customer, products: &[Product], promotion: Option<&Promotion>) -> f64 {
    let subtotal: f64 = products.iter().map(|p| p.price).sum();
    match promotion {
        Some(promotion) if promotion.is_applicable(customer) => promotion.apply(subtotal),
        _ => subtotal,
    }
}

impl Identifiable for Order {
    fn id(&self) -> String {
        self.order_id.to_string()
    }
}
