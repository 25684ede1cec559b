use async_trait::async_trait;

use crate::account::models::AccountId;
use crate::order::errors::OrderError;
use crate::order::models::NewOrder;
use crate::order::models::Order;

/// Port for order domain service operations.
#[async_trait]
pub trait OrderServicePort: Send + Sync + 'static {
    /// Place an order from the account's cart.
    ///
    /// The total is the sum of current product prices times quantities;
    /// item prices are snapshotted into the order and the cart is
    /// cleared afterwards.
    ///
    /// # Errors
    /// * `CartNotFound` - The account has no cart
    /// * `ProductNotFound` - A cart line references a missing product
    /// * `DatabaseError` - Database operation failed
    async fn place_order_from_cart(&self, account_id: AccountId) -> Result<Order, OrderError>;

    /// Retrieve the account's orders.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn orders_for_account(&self, account_id: AccountId) -> Result<Vec<Order>, OrderError>;

    /// Retrieve every order in the system.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all_orders(&self) -> Result<Vec<Order>, OrderError>;
}

/// Persistence operations for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Persist a new order with its items as a single transaction.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;

    /// Retrieve an account's orders with their items.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_account(&self, account_id: AccountId) -> Result<Vec<Order>, OrderError>;

    /// Retrieve every order with its items.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Order>, OrderError>;
}
