use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::cafe::{CafeError, CafeResult};
use crate::core::domain::Identifiable;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum ProductKind {
    Beverage {
        size: String,
        hot: bool,
        customizations: Vec<String>,
    },
    Dessert {
        vegan: bool,
        gluten_free: bool,
    },
}

// Product is an item on the café menu.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub kind: ProductKind,
}

impl Product {
    pub fn new(name: &str, price: f64, kind: ProductKind) -> Self {
        Self {
            product_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price,
            kind,
        }
    }

    pub fn beverage(name: &str, price: f64, size: &str, hot: bool) -> Self {
        Self::new(name, price, ProductKind::Beverage {
            size: size.to_string(),
            hot,
            customizations: vec![],
        })
    }

    pub fn dessert(name: &str, price: f64, vegan: bool, gluten_free: bool) -> Self {
        Self::new(name, price, ProductKind::Dessert { vegan, gluten_free })
    }

    // add_customization is only allowed on beverages
    pub fn add_customization(&mut self, customization: &str) -> CafeResult<()> {
        match &mut self.kind {
            ProductKind::Beverage { customizations, .. } => {
                customizations.push(customization.to_string());
                Ok(())
            }
            ProductKind::Dessert { .. } => {
                Err(CafeError::validation(
                    format!("{} no admite personalizaciones", self.name).as_str(), None))
            }
        }
    }

    pub fn description(&self) -> String {
        match &self.kind {
            ProductKind::Beverage { size, hot, customizations } => {
                let temperature = if *hot { "caliente" } else { "frío" };
                let mut desc = format!("{} ({}, {})", self.name, size, temperature);
                if !customizations.is_empty() {
                    desc.push_str(format!(" con {}", customizations.join(", ")).as_str());
                }
                desc
            }
            ProductKind::Dessert { vegan, gluten_free } => {
                let mut desc = self.name.to_string();
                if *vegan {
                    desc.push_str(" (vegano)");
                }
                if *gluten_free {
                    desc.push_str(" (sin gluten)");
                }
                desc
            }
        }
    }
}

impl Identifiable for Product {
    fn id(&self) -> String {
        self.product_id.to_string()
    }
}
