use serde::Serialize;

use crate::cart::models::Cart;
use crate::cart::models::CartItem;

pub mod add_item;
pub mod checkout;
pub mod get_cart;
pub mod list_carts;
pub mod public_add_item;

/// HTTP view of a cart, shared by the cart handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartData {
    pub id: i64,
    pub account_id: i64,
    pub items: Vec<CartItemData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemData {
    pub product_id: i64,
    pub quantity: i32,
}

impl From<&Cart> for CartData {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id.0,
            account_id: cart.account_id.0,
            items: cart.items.iter().map(CartItemData::from).collect(),
        }
    }
}

impl From<&CartItem> for CartItemData {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.0,
            quantity: item.quantity,
        }
    }
}
