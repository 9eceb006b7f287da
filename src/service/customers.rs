use super::OrderService;
use crate::error::AppError;
use crate::model::{Customer, NewCustomer};
use sqlx::PgPool;

const SELECT: &str = "SELECT id, nombre, email FROM cliente";

pub struct CustomerService;

impl CustomerService {
    /// All customers in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, AppError> {
        tracing::debug!("list clientes");
        let rows = sqlx::query_as::<_, Customer>(&format!("{SELECT} ORDER BY id"))
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, Customer>(&format!("{SELECT} WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert a customer. A duplicate email surfaces as `UniqueViolation` from the `cliente.email` constraint.
    pub async fn create(pool: &PgPool, input: &NewCustomer) -> Result<Customer, AppError> {
        tracing::debug!(email = %input.email, "create cliente");
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, Customer>(
            "INSERT INTO cliente (nombre, email) VALUES ($1, $2) RETURNING id, nombre, email",
        )
        .bind(&input.name)
        .bind(&input.email)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::info!(id = row.id, "cliente created");
        Ok(row)
    }

    /// Remove one customer. Restricted: fails with `Conflict` while the customer still has orders.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "delete cliente");
        let mut tx = pool.begin().await?;
        // Row lock keeps new orders for this customer out until commit.
        sqlx::query_scalar::<_, i32>("SELECT id FROM cliente WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound {
                resource: "cliente",
                id,
            })?;
        let orders = OrderService::count_for_customer(&mut *tx, id).await?;
        if orders > 0 {
            return Err(AppError::Conflict(format!(
                "cliente {} still has {} pedido(s); delete them first",
                id, orders
            )));
        }
        sqlx::query("DELETE FROM cliente WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id, "cliente deleted");
        Ok(())
    }
}
