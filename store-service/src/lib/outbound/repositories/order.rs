use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::account::models::AccountId;
use crate::catalog::models::ProductId;
use crate::order::errors::OrderError;
use crate::order::models::NewOrder;
use crate::order::models::Order;
use crate::order::models::OrderId;
use crate::order::models::OrderItem;
use crate::order::ports::OrderRepository;

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, order_id: i64) -> Result<Vec<OrderItem>, OrderError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT product_id, quantity, price_at_time
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    account_id: i64,
    total_price: Decimal,
    order_date: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    product_id: i64,
    quantity: i32,
    price_at_time: Decimal,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            product_id: ProductId(row.product_id),
            quantity: row.quantity,
            price_at_time: row.price_at_time,
        }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        // Order header and items land together or not at all.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (account_id, total_price)
            VALUES ($1, $2)
            RETURNING id, account_id, total_price, order_date
            "#,
        )
        .bind(order.account_id.0)
        .bind(order.total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price_at_time)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(row.id)
            .bind(item.product_id.0)
            .bind(item.quantity)
            .bind(item.price_at_time)
            .execute(&mut *tx)
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        Ok(Order {
            id: OrderId(row.id),
            account_id: AccountId(row.account_id),
            total_price: row.total_price,
            order_date: row.order_date,
            items: order.items,
        })
    }

    async fn find_by_account(&self, account_id: AccountId) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, account_id, total_price, order_date
            FROM orders
            WHERE account_id = $1
            ORDER BY order_date DESC
            "#,
        )
        .bind(account_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        let mut orders = Vec::with_capacity(rows.len());
        for r in rows {
            orders.push(Order {
                id: OrderId(r.id),
                account_id: AccountId(r.account_id),
                total_price: r.total_price,
                order_date: r.order_date,
                items: self.load_items(r.id).await?,
            });
        }

        Ok(orders)
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, account_id, total_price, order_date
            FROM orders
            ORDER BY order_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        let mut orders = Vec::with_capacity(rows.len());
        for r in rows {
            orders.push(Order {
                id: OrderId(r.id),
                account_id: AccountId(r.account_id),
                total_price: r.total_price,
                order_date: r.order_date,
                items: self.load_items(r.id).await?,
            });
        }

        Ok(orders)
    }
}
