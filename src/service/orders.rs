use crate::error::AppError;
use crate::model::{NewOrder, Order, OrderWithCustomer};
use sqlx::{PgConnection, PgPool};

const SELECT_JOINED: &str = r#"
    SELECT p.id, p.cliente_id, p.fecha_pedido, c.nombre AS c_nombre, c.email AS c_email
    FROM pedido p
    JOIN cliente c ON c.id = p.cliente_id
"#;

pub struct OrderService;

impl OrderService {
    /// All orders with their customer, in insertion order. One query, no per-order lookups.
    pub async fn list(pool: &PgPool) -> Result<Vec<OrderWithCustomer>, AppError> {
        tracing::debug!("list pedidos");
        let rows = sqlx::query_as::<_, OrderWithCustomer>(&format!("{SELECT_JOINED} ORDER BY p.id"))
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Orders owned by one customer, in insertion order.
    pub async fn list_for_customer(pool: &PgPool, customer_id: i32) -> Result<Vec<OrderWithCustomer>, AppError> {
        tracing::debug!(customer_id, "list pedidos for cliente");
        let rows = sqlx::query_as::<_, OrderWithCustomer>(&format!(
            "{SELECT_JOINED} WHERE p.cliente_id = $1 ORDER BY p.id"
        ))
        .bind(customer_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub(crate) async fn count_for_customer(conn: &mut PgConnection, customer_id: i32) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pedido WHERE cliente_id = $1")
            .bind(customer_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<OrderWithCustomer>, AppError> {
        let row = sqlx::query_as::<_, OrderWithCustomer>(&format!("{SELECT_JOINED} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert an order stamped with the current UTC time. Fails with `ForeignKeyViolation` when the customer does not exist.
    pub async fn create(pool: &PgPool, input: &NewOrder) -> Result<OrderWithCustomer, AppError> {
        tracing::debug!(customer_id = input.customer_id, "create pedido");
        let mut tx = pool.begin().await?;
        let customer: Option<(String, String)> =
            sqlx::query_as("SELECT nombre, email FROM cliente WHERE id = $1 FOR SHARE")
                .bind(input.customer_id)
                .fetch_optional(&mut *tx)
                .await?;
        let (customer_name, customer_email) = customer.ok_or_else(|| {
            AppError::ForeignKeyViolation(format!("cliente {} does not exist", input.customer_id))
        })?;
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO pedido (cliente_id) VALUES ($1) RETURNING id, cliente_id, fecha_pedido",
        )
        .bind(input.customer_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::info!(id = order.id, customer_id = order.customer_id, "pedido created");
        Ok(OrderWithCustomer {
            order,
            customer_name,
            customer_email,
        })
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "delete pedido");
        let mut tx = pool.begin().await?;
        sqlx::query_scalar::<_, i32>("DELETE FROM pedido WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound { resource: "pedido", id })?;
        tx.commit().await?;
        tracing::info!(id, "pedido deleted");
        Ok(())
    }
}
