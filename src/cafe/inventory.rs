use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::core::cafe::{CafeError, CafeResult};

// Inventory is the stock ledger of ingredients, keyed by ingredient name.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    ingredients: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            ingredients: BTreeMap::new(),
        }
    }

    // restock adds `quantity` to the ingredient, creating the entry if needed
    pub fn restock(&mut self, ingredient: &str, quantity: u32) {
        let stock = self.ingredients.entry(ingredient.to_string()).or_insert(0);
        *stock = stock.saturating_add(quantity);
        info!(ingredient = %ingredient, added = quantity, stock = *stock, "ingredient restocked");
    }

    pub fn stock(&self, ingredient: &str) -> u32 {
        self.ingredients.get(ingredient).copied().unwrap_or(0)
    }

    pub fn has_enough(&self, ingredient: &str, quantity: u32) -> bool {
        self.stock(ingredient) >= quantity
    }

    // consume takes `quantity` out of stock. It fails without touching the
    // ledger when less than `quantity` is on hand, and never adds an entry.
    pub fn consume(&mut self, ingredient: &str, quantity: u32) -> CafeResult<()> {
        let available = self.stock(ingredient);
        if available < quantity {
            warn!(ingredient = %ingredient, requested = quantity, available, "insufficient stock");
            return Err(CafeError::insufficient_stock(ingredient, quantity, available));
        }
        if let Some(stock) = self.ingredients.get_mut(ingredient) {
            *stock -= quantity;
        }
        info!(ingredient = %ingredient, consumed = quantity, stock = available - quantity, "ingredient consumed");
        Ok(())
    }

    pub fn ingredients(&self) -> impl Iterator<Item = (&String, &u32)> {
        self.ingredients.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::cafe::inventory::Inventory;
    use crate::core::cafe::CafeError;

    fn build_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.restock("café", 1000);
        inventory.restock("leche", 2000);
        inventory.restock("chocolate", 500);
        inventory
    }

    #[test]
    fn test_should_restock_additively() {
        let mut inventory = build_inventory();
        inventory.restock("café", 250);
        assert_eq!(1250, inventory.stock("café"));
        assert_eq!(0, inventory.stock("azúcar"));
        assert_eq!(3, inventory.ingredients().count());
    }

    #[test]
    fn test_should_fail_consume_beyond_stock() {
        let mut inventory = build_inventory();
        let err = inventory.consume("café", 1500).expect_err("should fail");
        assert_eq!(CafeError::insufficient_stock("café", 1500, 1000), err);
        assert_eq!(1000, inventory.stock("café"));
    }

    #[test]
    fn test_should_consume_exact_amount() {
        let mut inventory = build_inventory();
        inventory.consume("café", 200).expect("should consume");
        assert_eq!(800, inventory.stock("café"));
        inventory.consume("café", 800).expect("should consume rest");
        assert_eq!(0, inventory.stock("café"));
        assert!(!inventory.has_enough("café", 1));
    }

    #[test]
    fn test_should_fail_consume_unknown_ingredient() {
        let mut inventory = build_inventory();
        assert!(inventory.consume("azúcar", 1).is_err());
        assert!(inventory.consume("azúcar", 0).is_ok());
    }

    #[test]
    fn test_should_not_add_entries_when_consuming() {
        let mut inventory = build_inventory();
        inventory.consume("azúcar", 0).expect("nothing to take");
        assert!(inventory.consume("azúcar", 5).is_err());
        assert!(inventory.consume("café", 5000).is_err());
        let names: Vec<&String> = inventory.ingredients().map(|(name, _)| name).collect();
        assert_eq!(vec!["café", "chocolate", "leche"], names);
        assert_eq!(0, inventory.stock("azúcar"));
    }
}
