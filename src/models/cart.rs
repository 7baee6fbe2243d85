use serde::{Deserialize, Serialize};

use crate::api::{CalculateItem, CalculateRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub quantity: u32,
    pub name: String,
}

/// Recipes selected for a resource calculation, unique by recipe id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of a recipe. An existing entry has its quantity summed.
    pub fn add(&mut self, id: i64, name: &str, quantity: u32) -> &CartItem {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            let item = &mut self.items[index];
            item.quantity = item.quantity.saturating_add(quantity);
            return &self.items[index];
        }

        self.items.push(CartItem {
            id,
            quantity,
            name: name.to_string(),
        });
        &self.items[self.items.len() - 1]
    }

    /// Drops the whole entry for `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: i64) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_request(&self) -> CalculateRequest {
        CalculateRequest {
            items: self
                .items
                .iter()
                .map(|item| CalculateItem {
                    id: item.id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Quantity typed into a recipe card, read from its leading digits so
/// `"2.5"` is 2 and `"3abc"` is 3. Zero, negative, overflowing or non-numeric
/// input falls back to 1.
pub fn parse_quantity(input: &str) -> u32 {
    let input = input.trim_start();
    let input = input.strip_prefix('+').unwrap_or(input);
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());

    match input[..end].parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(quantity) => quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(1, "Wooden Club", 2);
        let item = cart.add(1, "Wooden Club", 3);
        assert_eq!(item.quantity, 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0], CartItem { id: 1, quantity: 5, name: "Wooden Club".into() });
    }

    #[test]
    fn test_add_appends_new_recipes_in_order() {
        let mut cart = Cart::new();
        cart.add(4, "Campfire", 1);
        cart.add(2, "Stone Axe", 2);
        let ids: Vec<i64> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(1, "Wooden Club", 2);
        assert_eq!(cart.remove(99), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_deletes_whole_entry() {
        let mut cart = Cart::new();
        cart.add(1, "Wooden Club", 2);
        cart.add(2, "Stone Axe", 7);
        let removed = cart.remove(2).unwrap();
        assert_eq!(removed.quantity, 7);
        assert!(cart.get(2).is_none());
        assert!(cart.get(1).is_some());
    }

    #[test]
    fn test_parse_quantity_fallbacks() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
    }

    #[test]
    fn test_parse_quantity_reads_leading_digits() {
        assert_eq!(parse_quantity("2.5"), 2);
        assert_eq!(parse_quantity("3abc"), 3);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("x3"), 1);
        assert_eq!(parse_quantity("99999999999"), 1);
    }

    #[test]
    fn test_to_request_drops_names() {
        let mut cart = Cart::new();
        cart.add(1, "Wooden Club", 2);
        cart.add(3, "Campfire", 1);
        let request = cart.to_request();
        assert_eq!(
            request.items,
            vec![CalculateItem { id: 1, quantity: 2 }, CalculateItem { id: 3, quantity: 1 }]
        );
    }
}
