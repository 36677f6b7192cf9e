use serde::{Deserialize, Serialize};
use crate::cafe::domain::customer::Customer;
use crate::core::cafe::{CafeError, CafeResult};

// Promotion grants `discount` (a fraction of the subtotal) to customers
// holding at least `required_points` loyalty points.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub name: String,
    pub discount: f64,
    pub required_points: u32,
}

impl Promotion {
    pub fn new(name: &str, discount: f64, required_points: u32) -> CafeResult<Self> {
        if !(0.0..=1.0).contains(&discount) {
            return Err(CafeError::validation(
                format!("discount {} for {} must be between 0 and 1", discount, name).as_str(),
                Some("400".to_string())));
        }
        Ok(Self {
            name: name.to_string(),
            discount,
            required_points,
        })
    }

    pub fn is_applicable(&self, customer: &Customer) -> bool {
        customer.loyalty_points >= self.required_points
    }

    pub fn apply(&self, subtotal: f64) -> f64 {
        subtotal * (1.0 - self.discount)
    }
}
