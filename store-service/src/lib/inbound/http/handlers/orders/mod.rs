use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::order::models::Order;
use crate::order::models::OrderItem;

pub mod list_my_orders;
pub mod list_orders;
pub mod public_create_order;

/// HTTP view of a placed order, shared by the order and checkout
/// handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderData {
    pub id: i64,
    pub account_id: i64,
    pub total_price: Decimal,
    pub order_date: DateTime<Utc>,
    pub items: Vec<OrderItemData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemData {
    pub product_id: i64,
    pub quantity: i32,
    pub price_at_time: Decimal,
}

impl From<&Order> for OrderData {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.0,
            account_id: order.account_id.0,
            total_price: order.total_price,
            order_date: order.order_date,
            items: order.items.iter().map(OrderItemData::from).collect(),
        }
    }
}

impl From<&OrderItem> for OrderItemData {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id.0,
            quantity: item.quantity,
            price_at_time: item.price_at_time,
        }
    }
}
