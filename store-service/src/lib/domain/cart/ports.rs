use async_trait::async_trait;

use crate::account::models::AccountId;
use crate::cart::errors::CartError;
use crate::cart::models::Cart;
use crate::cart::models::CartId;
use crate::catalog::models::ProductId;

/// Port for cart domain service operations.
#[async_trait]
pub trait CartServicePort: Send + Sync + 'static {
    /// Retrieve the account's cart.
    ///
    /// # Errors
    /// * `NotFound` - The account has no cart yet
    /// * `DatabaseError` - Database operation failed
    async fn get_cart(&self, account_id: AccountId) -> Result<Cart, CartError>;

    /// Add a product to the account's cart, creating the cart if the
    /// account does not have one yet.
    ///
    /// # Returns
    /// The updated cart
    ///
    /// # Errors
    /// * `ProductNotFound` - No product with this id
    /// * `DatabaseError` - Database operation failed
    async fn add_item(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<Cart, CartError>;

    /// Retrieve every cart in the system.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all_carts(&self) -> Result<Vec<Cart>, CartError>;
}

/// Persistence operations for carts.
#[async_trait]
pub trait CartRepository: Send + Sync + 'static {
    /// Retrieve an account's cart with its items.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_account(&self, account_id: AccountId) -> Result<Option<Cart>, CartError>;

    /// Create an empty cart for an account.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account_id: AccountId) -> Result<Cart, CartError>;

    /// Append an item line to a cart.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), CartError>;

    /// Remove all items from a cart.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn clear(&self, cart_id: CartId) -> Result<(), CartError>;

    /// Retrieve every cart with its items.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Cart>, CartError>;
}
