use std::sync::Arc;

use async_trait::async_trait;

use crate::account::models::AccountId;
use crate::cart::errors::CartError;
use crate::cart::models::Cart;
use crate::cart::ports::CartRepository;
use crate::cart::ports::CartServicePort;
use crate::catalog::models::ProductId;
use crate::catalog::ports::ProductRepository;

/// Domain service implementation for cart operations.
pub struct CartService<CR, PR>
where
    CR: CartRepository,
    PR: ProductRepository,
{
    cart_repository: Arc<CR>,
    product_repository: Arc<PR>,
}

impl<CR, PR> CartService<CR, PR>
where
    CR: CartRepository,
    PR: ProductRepository,
{
    pub fn new(cart_repository: Arc<CR>, product_repository: Arc<PR>) -> Self {
        Self {
            cart_repository,
            product_repository,
        }
    }
}

#[async_trait]
impl<CR, PR> CartServicePort for CartService<CR, PR>
where
    CR: CartRepository,
    PR: ProductRepository,
{
    async fn get_cart(&self, account_id: AccountId) -> Result<Cart, CartError> {
        self.cart_repository
            .find_by_account(account_id)
            .await?
            .ok_or(CartError::NotFound(account_id.to_string()))
    }

    async fn add_item(
        &self,
        account_id: AccountId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<Cart, CartError> {
        self.product_repository
            .find_by_id(product_id)
            .await
            .map_err(|e| CartError::DatabaseError(e.to_string()))?
            .ok_or(CartError::ProductNotFound(product_id.to_string()))?;

        // The cart is created lazily on first add.
        let cart = match self.cart_repository.find_by_account(account_id).await? {
            Some(cart) => cart,
            None => self.cart_repository.create(account_id).await?,
        };

        self.cart_repository
            .add_item(cart.id, product_id, quantity)
            .await?;

        self.cart_repository
            .find_by_account(account_id)
            .await?
            .ok_or(CartError::NotFound(account_id.to_string()))
    }

    async fn list_all_carts(&self) -> Result<Vec<Cart>, CartError> {
        self.cart_repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;
    use mockall::Sequence;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::cart::models::CartId;
    use crate::cart::models::CartItem;
    use crate::catalog::errors::CatalogError;
    use crate::catalog::models::NewProduct;
    use crate::catalog::models::Product;

    mock! {
        pub TestCartRepository {}

        #[async_trait]
        impl CartRepository for TestCartRepository {
            async fn find_by_account(&self, account_id: AccountId) -> Result<Option<Cart>, CartError>;
            async fn create(&self, account_id: AccountId) -> Result<Cart, CartError>;
            async fn add_item(&self, cart_id: CartId, product_id: ProductId, quantity: i32) -> Result<(), CartError>;
            async fn clear(&self, cart_id: CartId) -> Result<(), CartError>;
            async fn list_all(&self) -> Result<Vec<Cart>, CartError>;
        }
    }

    mock! {
        pub TestProductRepository {}

        #[async_trait]
        impl ProductRepository for TestProductRepository {
            async fn create(&self, product: NewProduct) -> Result<Product, CatalogError>;
            async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;
            async fn list_all(&self) -> Result<Vec<Product>, CatalogError>;
        }
    }

    fn product() -> Product {
        Product {
            id: ProductId(7),
            name: "Laptop".to_string(),
            price: dec!(999.99),
        }
    }

    #[tokio::test]
    async fn test_get_cart_not_found() {
        let mut cart_repository = MockTestCartRepository::new();
        cart_repository
            .expect_find_by_account()
            .times(1)
            .returning(|_| Ok(None));

        let service = CartService::new(
            Arc::new(cart_repository),
            Arc::new(MockTestProductRepository::new()),
        );

        let result = service.get_cart(AccountId(1)).await;
        assert!(matches!(result, Err(CartError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_item_creates_cart_lazily() {
        let mut product_repository = MockTestProductRepository::new();
        product_repository
            .expect_find_by_id()
            .with(eq(ProductId(7)))
            .times(1)
            .returning(|_| Ok(Some(product())));

        let mut cart_repository = MockTestCartRepository::new();
        let mut seq = Sequence::new();

        cart_repository
            .expect_find_by_account()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        cart_repository
            .expect_create()
            .with(eq(AccountId(1)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|account_id| {
                Ok(Cart {
                    id: CartId(101),
                    account_id,
                    items: vec![],
                })
            });
        cart_repository
            .expect_add_item()
            .with(eq(CartId(101)), eq(ProductId(7)), eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        cart_repository
            .expect_find_by_account()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|account_id| {
                Ok(Some(Cart {
                    id: CartId(101),
                    account_id,
                    items: vec![CartItem {
                        product_id: ProductId(7),
                        quantity: 2,
                    }],
                }))
            });

        let service = CartService::new(Arc::new(cart_repository), Arc::new(product_repository));

        let cart = service.add_item(AccountId(1), ProductId(7), 2).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_add_item_unknown_product() {
        let mut product_repository = MockTestProductRepository::new();
        product_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let mut cart_repository = MockTestCartRepository::new();
        cart_repository.expect_find_by_account().times(0);
        cart_repository.expect_create().times(0);
        cart_repository.expect_add_item().times(0);

        let service = CartService::new(Arc::new(cart_repository), Arc::new(product_repository));

        let result = service.add_item(AccountId(1), ProductId(999), 1).await;
        assert!(matches!(result, Err(CartError::ProductNotFound(_))));
    }
}
