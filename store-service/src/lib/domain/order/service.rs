use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::account::models::AccountId;
use crate::cart::ports::CartRepository;
use crate::catalog::ports::ProductRepository;
use crate::order::errors::OrderError;
use crate::order::models::NewOrder;
use crate::order::models::Order;
use crate::order::models::OrderItem;
use crate::order::ports::OrderRepository;
use crate::order::ports::OrderServicePort;

/// Domain service implementation for order operations.
pub struct OrderService<OR, CR, PR>
where
    OR: OrderRepository,
    CR: CartRepository,
    PR: ProductRepository,
{
    order_repository: Arc<OR>,
    cart_repository: Arc<CR>,
    product_repository: Arc<PR>,
}

impl<OR, CR, PR> OrderService<OR, CR, PR>
where
    OR: OrderRepository,
    CR: CartRepository,
    PR: ProductRepository,
{
    pub fn new(
        order_repository: Arc<OR>,
        cart_repository: Arc<CR>,
        product_repository: Arc<PR>,
    ) -> Self {
        Self {
            order_repository,
            cart_repository,
            product_repository,
        }
    }
}

#[async_trait]
impl<OR, CR, PR> OrderServicePort for OrderService<OR, CR, PR>
where
    OR: OrderRepository,
    CR: CartRepository,
    PR: ProductRepository,
{
    async fn place_order_from_cart(&self, account_id: AccountId) -> Result<Order, OrderError> {
        let cart = self
            .cart_repository
            .find_by_account(account_id)
            .await?
            .ok_or(OrderError::CartNotFound(account_id.to_string()))?;

        let mut total_price = Decimal::ZERO;
        let mut items = Vec::with_capacity(cart.items.len());

        for line in &cart.items {
            let product = self
                .product_repository
                .find_by_id(line.product_id)
                .await?
                .ok_or(OrderError::ProductNotFound(line.product_id.to_string()))?;

            // Snapshot the catalog price at placement time.
            total_price += product.price * Decimal::from(line.quantity);
            items.push(OrderItem {
                product_id: line.product_id,
                quantity: line.quantity,
                price_at_time: product.price,
            });
        }

        let order = self
            .order_repository
            .create(NewOrder {
                account_id,
                total_price,
                items,
            })
            .await?;

        self.cart_repository.clear(cart.id).await?;

        tracing::info!(
            order_id = %order.id,
            account_id = %account_id,
            total_price = %order.total_price,
            "Order placed"
        );

        Ok(order)
    }

    async fn orders_for_account(&self, account_id: AccountId) -> Result<Vec<Order>, OrderError> {
        self.order_repository.find_by_account(account_id).await
    }

    async fn list_all_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.order_repository.list_all().await
    }
}
