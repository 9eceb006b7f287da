use crate::error::AppError;
use crate::model::{NewProduct, Product};
use sqlx::PgPool;

const SELECT: &str = "SELECT id, nombre, precio, stock FROM producto";

pub struct ProductService;

impl ProductService {
    /// All products in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        tracing::debug!("list productos");
        let rows = sqlx::query_as::<_, Product>(&format!("{SELECT} ORDER BY id"))
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(&format!("{SELECT} WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, input: &NewProduct) -> Result<Product, AppError> {
        tracing::debug!(nombre = %input.name, "create producto");
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO producto (nombre, precio, stock) VALUES ($1, $2, $3) RETURNING id, nombre, precio, stock",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::info!(id = row.id, "producto created");
        Ok(row)
    }

    /// Remove one product. Fails with `NotFound` when no row has `id`.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "delete producto");
        let mut tx = pool.begin().await?;
        sqlx::query_scalar::<_, i32>("DELETE FROM producto WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound {
                resource: "producto",
                id,
            })?;
        tx.commit().await?;
        tracing::info!(id, "producto deleted");
        Ok(())
    }
}
