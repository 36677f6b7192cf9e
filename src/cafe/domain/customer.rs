use serde::{Deserialize, Serialize};
use tracing::info;
use crate::cafe::domain::order::Order;
use crate::cafe::domain::product::Product;
use crate::cafe::domain::promotion::Promotion;
use crate::core::cafe::EmployeeRole;
use crate::core::domain::Identifiable;
use crate::parties::domain::model::{PartyKind, Person};
use crate::parties::domain::Party;

// Customer earns one loyalty point per product ordered.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub person: Person,
    pub orders: Vec<Order>,
    pub loyalty_points: u32,
}

impl Customer {
    pub fn new(name: &str, national_id: &str) -> Self {
        Self {
            person: Person::new(name, national_id),
            orders: vec![],
            loyalty_points: 0,
        }
    }

    // place_order always succeeds and never consults the inventory. The
    // promotion sees the points held before this order; one point per
    // product is added afterwards.
    pub fn place_order(&mut self, products: Vec<Product>, promotion: Option<&Promotion>) -> Order {
        let earned = u32::try_from(products.len()).unwrap_or(u32::MAX);
        let order = Order::new(&*self, products, promotion);
        self.orders.push(order.clone());
        self.loyalty_points = self.loyalty_points.saturating_add(earned);
        info!(customer_id = %self.person.person_id, order_id = %order.order_id, total = order.total,
            loyalty_points = self.loyalty_points, "order placed");
        order
    }
}

impl Identifiable for Customer {
    fn id(&self) -> String {
        self.person.person_id.to_string()
    }
}

impl Party for Customer {
    fn name(&self) -> &str {
        self.person.name.as_str()
    }

    fn national_id(&self) -> &str {
        self.person.national_id.as_str()
    }

    fn kind(&self) -> PartyKind {
        PartyKind::Customer
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub person: Person,
    pub role: EmployeeRole,
}

impl Employee {
    pub fn new(name: &str, national_id: &str, role: EmployeeRole) -> Self {
        Self {
            person: Person::new(name, national_id),
            role,
        }
    }
}

impl Identifiable for Employee {
    fn id(&self) -> String {
        self.person.person_id.to_string()
    }
}

impl Party for Employee {
    fn name(&self) -> &str {
        self.person.name.as_str()
    }

    fn national_id(&self) -> &str {
        self.person.national_id.as_str()
    }

    fn kind(&self) -> PartyKind {
        PartyKind::Employee
    }
}
