use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::account::models::AccountId;
use crate::catalog::models::ProductId;

/// Placed order aggregate.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub account_id: AccountId,
    pub total_price: Decimal,
    pub order_date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// Order unique identifier type, database-assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One product line in an order.
///
/// `price_at_time` is the product price snapshotted at placement; later
/// catalog changes do not affect placed orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i32,
    pub price_at_time: Decimal,
}

/// An order to be persisted: everything but the database-assigned id and
/// placement timestamp.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub account_id: AccountId,
    pub total_price: Decimal,
    pub items: Vec<OrderItem>,
}
