use async_trait::async_trait;
use sqlx::PgPool;

use crate::account::models::AccountId;
use crate::cart::errors::CartError;
use crate::cart::models::Cart;
use crate::cart::models::CartId;
use crate::cart::models::CartItem;
use crate::cart::ports::CartRepository;
use crate::catalog::models::ProductId;

pub struct PostgresCartRepository {
    pool: PgPool,
}

impl PostgresCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, cart_id: i64) -> Result<Vec<CartItem>, CartError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r#"
            SELECT product_id, quantity
            FROM cart_items
            WHERE cart_id = $1
            ORDER BY id
            "#,
        )
        .bind(cart_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(CartItem::from).collect())
    }
}

#[derive(sqlx::FromRow)]
struct CartRow {
    id: i64,
    account_id: i64,
}

#[derive(sqlx::FromRow)]
struct CartItemRow {
    product_id: i64,
    quantity: i32,
}

impl From<CartItemRow> for CartItem {
    fn from(row: CartItemRow) -> Self {
        CartItem {
            product_id: ProductId(row.product_id),
            quantity: row.quantity,
        }
    }
}

#[async_trait]
impl CartRepository for PostgresCartRepository {
    async fn find_by_account(&self, account_id: AccountId) -> Result<Option<Cart>, CartError> {
        let row = sqlx::query_as::<_, CartRow>(
            r#"
            SELECT id, account_id
            FROM carts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Cart {
                id: CartId(r.id),
                account_id: AccountId(r.account_id),
                items: self.load_items(r.id).await?,
            })),
            None => Ok(None),
        }
    }

    async fn create(&self, account_id: AccountId) -> Result<Cart, CartError> {
        let row = sqlx::query_as::<_, CartRow>(
            r#"
            INSERT INTO carts (account_id)
            VALUES ($1)
            RETURNING id, account_id
            "#,
        )
        .bind(account_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(Cart {
            id: CartId(row.id),
            account_id: AccountId(row.account_id),
            items: vec![],
        })
    }

    async fn add_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), CartError> {
        sqlx::query(
            r#"
            INSERT INTO cart_items (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(cart_id.0)
        .bind(product_id.0)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self, cart_id: CartId) -> Result<(), CartError> {
        sqlx::query(
            r#"
            DELETE FROM cart_items
            WHERE cart_id = $1
            "#,
        )
        .bind(cart_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Cart>, CartError> {
        let rows = sqlx::query_as::<_, CartRow>(
            r#"
            SELECT id, account_id
            FROM carts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        let mut carts = Vec::with_capacity(rows.len());
        for r in rows {
            carts.push(Cart {
                id: CartId(r.id),
                account_id: AccountId(r.account_id),
                items: self.load_items(r.id).await?,
            });
        }

        Ok(carts)
    }
}
