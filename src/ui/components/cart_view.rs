use crate::models::Cart;
use crate::ui::{escape_html, placeholder};

pub struct CartView;

impl CartView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, cart: &Cart) -> String {
        if cart.is_empty() {
            return placeholder("No items selected");
        }

        cart.items()
            .iter()
            .map(|item| {
                format!(
                    "<div class=\"cart-item\"><span>{} x{}</span>\
                     <button class=\"remove-btn\" onclick=\"removeFromCart({})\">Remove</button></div>",
                    escape_html(&item.name),
                    item.quantity,
                    item.id
                )
            })
            .collect()
    }
}
