use std::fmt;

use crate::account::models::AccountId;
use crate::catalog::models::ProductId;

/// Shopping cart aggregate, one per account.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub account_id: AccountId,
    pub items: Vec<CartItem>,
}

/// Cart unique identifier type, database-assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartId(pub i64);

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One product line in a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i32,
}
